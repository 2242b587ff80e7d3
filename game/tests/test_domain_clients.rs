use rand::rngs::StdRng;
use rand::SeedableRng;

use game::clients::{
    ClientState, ClientsDomain, RestaurantAppeal, CLIENT_PATIENCE, FLEE_DURATION,
};
use game::map::{Restaurant, WorldMap};
use game::math::TileCenter;

const TICK: f32 = 1.0 / 60.0;

fn appeal(tacos: i32, kebab: i32) -> [RestaurantAppeal; 2] {
    [
        RestaurantAppeal {
            restaurant: Restaurant::Tacos,
            reputation: tacos,
            spawn_rate_penalty: 0.0,
        },
        RestaurantAppeal {
            restaurant: Restaurant::Kebab,
            reputation: kebab,
            spawn_rate_penalty: 0.0,
        },
    ]
}

fn waiting_client(domain: &mut ClientsDomain, map: &WorldMap, since: f32, rng: &mut StdRng) {
    let (id, _) = domain.spawn_visitor(Restaurant::Tacos, since, rng);
    let slot = map.queue_slots(Restaurant::Tacos)[0];
    let client = domain.get_client_mut(id).unwrap();
    client.zone = Restaurant::Tacos.zone();
    client.position = slot.center();
    client.queue_slot = Some(slot);
    client.state = ClientState::Waiting;
    client.wait_since = Some(since);
}

#[test]
fn test_patience_expires_exactly_at_the_deadline() {
    let map = WorldMap::new();
    let mut rng = StdRng::seed_from_u64(1);
    let mut domain = ClientsDomain::default();
    waiting_client(&mut domain, &map, 10.0, &mut rng);
    let id = domain.clients[0].id;

    domain.update(10.0 + CLIENT_PATIENCE - 0.1, TICK, &map, appeal(50, 50), &mut rng);
    assert_eq!(domain.get_client(id).unwrap().state, ClientState::Waiting);

    domain.update(10.0 + CLIENT_PATIENCE, TICK, &map, appeal(50, 50), &mut rng);
    assert_eq!(domain.get_client(id).unwrap().state, ClientState::Angry);
}

#[test]
fn test_terminal_states_are_permanent() {
    let map = WorldMap::new();
    let mut rng = StdRng::seed_from_u64(2);
    let mut domain = ClientsDomain::default();
    let (id, _) = domain.spawn_street(0.0, &mut rng);

    domain.get_client_mut(id).unwrap().depart();
    assert!(!domain.get_client(id).unwrap().is_alive());

    for step in 1..100 {
        domain.update(step as f32 * TICK, TICK, &map, appeal(50, 50), &mut rng);
        assert_eq!(domain.get_client(id).unwrap().state, ClientState::Gone);
    }

    let vanished = domain.vanish_departed();
    assert_eq!(vanished.len(), 1);
    assert!(domain.get_client(id).is_err());
}

#[test]
fn test_fear_accumulates_to_the_flee_threshold() {
    let map = WorldMap::new();
    let mut rng = StdRng::seed_from_u64(3);
    let mut domain = ClientsDomain::default();
    waiting_client(&mut domain, &map, 0.0, &mut rng);
    let id = domain.clients[0].id;

    let client = domain.get_client_mut(id).unwrap();
    assert!(!client.scare(1.5, 1.0));
    assert_eq!(client.state, ClientState::Waiting);

    assert!(client.scare(1.5, 2.0));
    assert_eq!(client.state, ClientState::Fleeing);

    let mut now = 2.0;
    while now < 2.0 + FLEE_DURATION + 0.1 {
        now += TICK;
        domain.update(now, TICK, &map, appeal(50, 50), &mut rng);
    }
    assert_eq!(domain.get_client(id).unwrap().state, ClientState::Gone);
}

#[test]
fn test_attacked_client_dies_after_the_death_animation() {
    let map = WorldMap::new();
    let mut rng = StdRng::seed_from_u64(4);
    let mut random = game::math::Random::new();
    let mut domain = ClientsDomain::default();
    waiting_client(&mut domain, &map, 0.0, &mut rng);
    let id = domain.clients[0].id;

    domain.get_client_mut(id).unwrap().take_damage(1.0, &mut random);
    assert_eq!(domain.get_client(id).unwrap().state, ClientState::Dying);
    assert_eq!(domain.get_client(id).unwrap().blood.len(), 8);

    let mut now = 1.0;
    while now < 2.5 {
        now += TICK;
        domain.update(now, TICK, &map, appeal(50, 50), &mut rng);
    }
    assert_eq!(domain.get_client(id).unwrap().state, ClientState::Dead);
    assert!(!domain.get_client(id).unwrap().is_alive());
}

#[test]
fn test_restaurant_choice_follows_relative_reputation() {
    let map = WorldMap::new();
    let mut tacos = 0;
    for seed in 0..1000u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut domain = ClientsDomain::default();
        let (id, _) = domain.spawn_street(0.0, &mut rng);
        // decision interval is at most 3 seconds after spawn
        domain.update(4.0, TICK, &map, appeal(80, 20), &mut rng);
        if domain.get_client(id).unwrap().target == Some(Restaurant::Tacos) {
            tacos += 1;
        }
    }
    let fraction = tacos as f32 / 1000.0;
    assert!(
        (0.75..0.85).contains(&fraction),
        "observed tacos fraction {}",
        fraction
    );
}
