pub mod handlers;
pub mod normalize;
pub mod router;
pub mod trace_layer;
