pub mod bus_ops;
pub mod key_ops;
