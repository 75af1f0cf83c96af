pub mod element_at;
pub mod filter;
pub mod future;
pub mod ignore_elements;
pub mod lifecycle;
pub mod map;
pub mod on_complete;
pub mod on_error;
pub mod skip;
pub mod skip_until;
pub mod skip_while;
pub mod take;
pub mod tap;
