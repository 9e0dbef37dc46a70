pub mod event_ring;
