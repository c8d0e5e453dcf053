pub mod locate_use_case;
pub mod ports;
pub mod select;
