mod reactor;

pub use reactor::Reactor;
