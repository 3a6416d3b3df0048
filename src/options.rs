use crate::geometry::{Coord, Directions, chebyshev_distance, manhattan_distance};
use crate::grid::Cost;

use num_traits::{Bounded, NumCast};


/// Estimate of the remaining cost used by A*
///
/// Manhattan is admissible only with four-way movement and every cell costing at least 1.
/// With cheaper cells or diagonal moves it can overestimate, and A* may then return a
/// path that is not the cheapest. Chebyshev suits eight-way movement on cost >= 1 cells,
/// Zero turns A* into Dijkstra.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    #[default]
    Manhattan,
    Chebyshev,
    Zero,
}

impl Heuristic {

    /// Estimated cost from `from` to `to`, saturating at `C::max_value()`
    pub fn estimate<C: Cost>(self, from: Coord, to: Coord) -> C {
        let distance = match self {
            Heuristic::Manhattan => manhattan_distance(from, to),
            Heuristic::Chebyshev => chebyshev_distance(from, to),
            Heuristic::Zero => return C::zero(),
        };
        <C as NumCast>::from(distance).unwrap_or_else(<C as Bounded>::max_value)
    }
}


/// Knobs shared by every search entry point
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchOptions {
    pub directions: Directions,
    pub heuristic: Heuristic, // only read by A*
}

impl SearchOptions {

    pub fn with_directions(mut self, directions: Directions) -> Self {
        self.directions = directions;
        self
    }

    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_four_way_manhattan() {
        let options = SearchOptions::default();
        assert_eq!(options.directions, Directions::Four);
        assert_eq!(options.heuristic, Heuristic::Manhattan);
    }

    #[test]
    fn test_estimates() {
        let a = Coord::new(0, 0);
        let b = Coord::new(3, 4);
        assert_eq!(Heuristic::Manhattan.estimate::<u32>(a, b), 7);
        assert_eq!(Heuristic::Chebyshev.estimate::<u32>(a, b), 4);
        assert_eq!(Heuristic::Zero.estimate::<u32>(a, b), 0);
    }

    #[test]
    fn test_estimate_saturates() {
        let far = Coord::new(200, 200);
        assert_eq!(Heuristic::Manhattan.estimate::<u8>(Coord::new(0, 0), far), u8::MAX);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_options_from_json() {
        let options: SearchOptions = serde_json::from_str(r#"{"directions":"Eight"}"#).unwrap();
        assert_eq!(options, SearchOptions::default().with_directions(Directions::Eight));
    }
}
