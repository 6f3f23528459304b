//! Response DTOs. Request DTOs live next to their entities in
//! `apibase-entity`.

pub mod response;
