use serde::{Deserialize, Serialize};

use crate::domains::animation::Animations;
use crate::domains::clients::{Clients, ClientsError};
use crate::domains::equipment::EquipmentKey;
use crate::domains::incidents::Incidents;
use crate::domains::minigame::Minigame;
use crate::domains::sabotage::{Sabotage, SabotageError, SabotageKey};
use crate::domains::stock::{Stock, StockError};
use crate::domains::weapons::{Weapons, WeaponsError};
use crate::model::{PlayerId, Players};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Action {
    Move { direction: [f32; 2] },
    Interact,
    Attack,
    Sweep,
    Sabotage { kind: SabotageKey },
    PickupWeapon,
    Restock { ingredient: Option<String> },
    Repair { equipment: EquipmentKey },
    PressKey { key: char },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Session {
    GameFinished { winner: Option<PlayerId> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    Clients(Vec<Clients>),
    Players(Vec<Players>),
    Stock(Vec<Stock>),
    Weapons(Vec<Weapons>),
    Sabotage(Vec<Sabotage>),
    Minigame(Vec<Minigame>),
    Animations(Vec<Animations>),
    Incidents(Vec<Incidents>),
    Session(Vec<Session>),
}

macro_rules! impl_event_from {
    ($variant:ident, $domain:ty) => {
        impl From<Vec<$domain>> for Event {
            fn from(events: Vec<$domain>) -> Self {
                Event::$variant(events)
            }
        }

        impl From<$domain> for Event {
            fn from(event: $domain) -> Self {
                Event::$variant(vec![event])
            }
        }
    };
}

impl_event_from!(Clients, Clients);
impl_event_from!(Players, Players);
impl_event_from!(Stock, Stock);
impl_event_from!(Weapons, Weapons);
impl_event_from!(Sabotage, Sabotage);
impl_event_from!(Minigame, Minigame);
impl_event_from!(Animations, Animations);
impl_event_from!(Incidents, Incidents);
impl_event_from!(Session, Session);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ActionError {
    GameOver,
    PlayerNotFound { id: PlayerId },
    MinigameAlreadyActive,
    ServiceInProgress,
    NoClientNearby,
    NoTargetInRange,
    NothingToPickUp,
    NothingToRepair { equipment: EquipmentKey },
    NotEnoughMoney { required: i32 },
    Clients(ClientsError),
    Stock(StockError),
    Weapons(WeaponsError),
    Sabotage(SabotageError),

    Test,
}

impl From<ClientsError> for ActionError {
    fn from(error: ClientsError) -> Self {
        ActionError::Clients(error)
    }
}

impl From<StockError> for ActionError {
    fn from(error: StockError) -> Self {
        ActionError::Stock(error)
    }
}

impl From<WeaponsError> for ActionError {
    fn from(error: WeaponsError) -> Self {
        ActionError::Weapons(error)
    }
}

impl From<SabotageError> for ActionError {
    fn from(error: SabotageError) -> Self {
        ActionError::Sabotage(error)
    }
}
