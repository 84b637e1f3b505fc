use shop_core::{Name, RegisterId, ShelfId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorldError {
    #[error("product {0:?} is not in the catalog")]
    UnknownProduct(Name),

    #[error("structure {0:?} is not in the catalog")]
    UnknownStructure(Name),

    #[error("shelf {shelf} stocked with {quantity} units but capacity is {capacity}")]
    OverCapacity {
        shelf: ShelfId,
        quantity: u32,
        capacity: u32,
    },

    #[error("register {0} has no queue slots")]
    NoQueueSlots(RegisterId),
}

pub type WorldResult<T> = Result<T, WorldError>;
