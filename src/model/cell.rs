use super::component::Component;

/// State held by one grid position.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Cell {
    pub heat: f64,
    pub power: f64,
    pub component: Option<Component>,
}
