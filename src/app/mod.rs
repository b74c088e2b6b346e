pub mod events_use_case;
pub mod ports;
