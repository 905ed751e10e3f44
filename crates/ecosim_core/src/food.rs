use crate::error::{Result, SimError};
use crate::rng::RandomSource;
use ecosim_data::{FoodSource, Position};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Every food source in the arena, in placement order.
///
/// Sources are never consumed; the field only grows.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FoodField {
    sources: Vec<FoodSource>,
}

impl FoodField {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `count` sources placed uniformly in `[0, width) x [0, height)`.
    pub fn scatter_with_rng<R: Rng>(count: usize, width: f64, height: f64, rng: &mut R) -> Self {
        let mut field = Self::new();
        for _ in 0..count {
            field.spawn_with_rng(width, height, rng);
        }
        field
    }

    pub fn spawn_with_rng<R: Rng>(&mut self, width: f64, height: f64, rng: &mut R) -> FoodSource {
        let source = FoodSource::new(rng.uniform(0.0, width), rng.uniform(0.0, height));
        self.sources.push(source);
        source
    }

    pub fn push(&mut self, source: FoodSource) {
        self.sources.push(source);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FoodSource> {
        self.sources.iter()
    }

    /// Offset `(food.x - x, food.y - y)` to the nearest source by Euclidean
    /// distance. Ties go to the source placed first.
    pub fn closest_offset(&self, position: Position) -> Result<(f64, f64)> {
        let mut best: Option<(f64, f64, f64)> = None;
        for food in &self.sources {
            let dx = food.position.x - position.x;
            let dy = food.position.y - position.y;
            let dist = dx.hypot(dy);
            if best.map_or(true, |(d, _, _)| dist < d) {
                best = Some((dist, dx, dy));
            }
        }
        best.map(|(_, dx, dy)| (dx, dy))
            .ok_or(SimError::NoFoodSources)
    }
}

impl FromIterator<FoodSource> for FoodField {
    fn from_iter<I: IntoIterator<Item = FoodSource>>(iter: I) -> Self {
        Self {
            sources: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_closest_offset() {
        let field: FoodField = [
            FoodSource::new(90.0, 90.0),
            FoodSource::new(12.0, 7.0),
            FoodSource::new(50.0, 50.0),
        ]
        .into_iter()
        .collect();

        let (dx, dy) = field.closest_offset(Position::new(10.0, 10.0)).unwrap();
        assert_eq!((dx, dy), (2.0, -3.0));
    }

    #[test]
    fn test_tie_goes_to_first() {
        let field: FoodField = [FoodSource::new(15.0, 10.0), FoodSource::new(5.0, 10.0)]
            .into_iter()
            .collect();
        let (dx, dy) = field.closest_offset(Position::new(10.0, 10.0)).unwrap();
        assert_eq!((dx, dy), (5.0, 0.0));
    }

    #[test]
    fn test_empty_field_fails() {
        let field = FoodField::new();
        assert_eq!(
            field.closest_offset(Position::new(1.0, 1.0)),
            Err(SimError::NoFoodSources)
        );
    }

    #[test]
    fn test_scatter_within_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let field = FoodField::scatter_with_rng(200, 100.0, 100.0, &mut rng);
        assert_eq!(field.len(), 200);
        assert!(field.iter().all(|f| {
            (0.0..100.0).contains(&f.position.x) && (0.0..100.0).contains(&f.position.y)
        }));
    }
}
