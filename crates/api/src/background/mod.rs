//! Background tasks spawned by the binary entrypoint.

pub mod rental_sweep;
