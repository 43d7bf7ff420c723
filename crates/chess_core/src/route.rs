use crate::coordinate::Coordinate;
use crate::error::MoveError;

/// Squares strictly between a move's source and target, in travel order.
///
/// Every square on the route must be empty for the move to go through.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Route {
    squares: Vec<Coordinate>,
}

impl Route {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn through(square: Coordinate) -> Self {
        Self {
            squares: vec![square],
        }
    }

    /// Walk from `from` toward `to` one unit step at a time, collecting every
    /// square before `to`. The caller guarantees the two squares share a rank,
    /// file or diagonal.
    pub fn sliding(from: Coordinate, to: Coordinate) -> Result<Self, MoveError> {
        let dx = to.delta_column(from).signum();
        let dy = to.delta_row(from).signum();

        let mut squares = Vec::new();
        let mut current = from.offset(dx, dy)?;
        while current != to {
            squares.push(current);
            current = current.offset(dx, dy)?;
        }
        Ok(Self { squares })
    }

    pub fn squares(&self) -> &[Coordinate] {
        &self.squares
    }

    pub fn len(&self) -> usize {
        self.squares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Coordinate> {
        self.squares.iter()
    }
}

impl<'a> IntoIterator for &'a Route {
    type Item = &'a Coordinate;
    type IntoIter = std::slice::Iter<'a, Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.squares.iter()
    }
}

impl From<Route> for Vec<Coordinate> {
    fn from(route: Route) -> Self {
        route.squares
    }
}

#[cfg(test)]
#[path = "route_tests.rs"]
mod route_tests;
