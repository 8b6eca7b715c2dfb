//! Arrangement of a catalog on the exhibit plane.
use std::collections::HashMap;

use glam::{IVec2, Vec3};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::exhibit::{Catalog, ExhibitId};
use crate::layout::{ring_of, LayoutStrategy, SpiralLayout};

/// Configuration for placing exhibits in world space.
#[non_exhaustive]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq)]
pub struct ArrangeConfig {
    /// World units between neighbouring lattice cells.
    pub spacing: f32,
    /// Fraction of a cell a scaled model may span, in (0, 1].
    pub fill: f32,
    /// Z coordinate of the exhibit plane.
    pub plane_z: f32,
}

impl Default for ArrangeConfig {
    fn default() -> Self {
        Self {
            spacing: 1.0,
            fill: 0.9,
            plane_z: 0.0,
        }
    }
}

impl ArrangeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the lattice spacing.
    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Sets the cell fill fraction.
    pub fn with_fill(mut self, fill: f32) -> Self {
        self.fill = fill;
        self
    }

    /// Sets the exhibit plane height.
    pub fn with_plane_z(mut self, plane_z: f32) -> Self {
        self.plane_z = plane_z;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if !self.spacing.is_finite() || self.spacing <= 0.0 {
            return Err(Error::InvalidConfig("spacing must be finite and > 0".into()));
        }
        if !(self.fill > 0.0 && self.fill <= 1.0) {
            return Err(Error::InvalidConfig("fill must be in (0, 1]".into()));
        }
        if !self.plane_z.is_finite() {
            return Err(Error::InvalidConfig("plane_z must be finite".into()));
        }
        Ok(())
    }

    /// World position of a lattice cell.
    pub fn world_position(&self, cell: IVec2) -> Vec3 {
        (cell.as_vec2() * self.spacing).extend(self.plane_z)
    }

    /// Uniform scale that fits a model with bounding-box `size` into one cell.
    pub fn fit_scale(&self, size: Vec3) -> f32 {
        fit_scale(size, self.fill) * self.spacing
    }
}

/// Uniform scale that makes the largest side of `size` equal to `fill`.
///
/// Degenerate boxes (zero, negative or non-finite extent) keep scale `1.0`.
pub fn fit_scale(size: Vec3, fill: f32) -> f32 {
    let max = size.max_element();
    if !size.is_finite() || max <= 0.0 {
        warn!(?size, "degenerate bounding box; keeping unit scale");
        return 1.0;
    }
    fill / max
}

/// An exhibit assigned to a lattice cell.
#[derive(Debug, Clone, PartialEq)]
pub struct ExhibitPlacement {
    /// Exhibit identifier.
    pub exhibit_id: ExhibitId,
    /// Index in the catalog and in the layout.
    pub index: usize,
    /// Lattice cell.
    pub cell: IVec2,
    /// World position of the cell on the exhibit plane.
    pub world: Vec3,
}

/// Result of arranging a catalog.
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct Arrangement {
    placements: Vec<ExhibitPlacement>,
    index: HashMap<ExhibitId, usize>,
    config: ArrangeConfig,
}

impl Arrangement {
    fn new(placements: Vec<ExhibitPlacement>, config: ArrangeConfig) -> Self {
        let index = placements
            .iter()
            .map(|p| (p.exhibit_id.clone(), p.index))
            .collect();
        Self {
            placements,
            index,
            config,
        }
    }

    /// Placements in catalog order.
    pub fn placements(&self) -> &[ExhibitPlacement] {
        &self.placements
    }

    /// Configuration the placements were computed with.
    pub fn config(&self) -> &ArrangeConfig {
        &self.config
    }

    pub fn get(&self, id: &str) -> Option<&ExhibitPlacement> {
        self.index.get(id).map(|&i| &self.placements[i])
    }

    /// Outermost ring occupied by any placement.
    pub fn extent(&self) -> i32 {
        self.placements
            .iter()
            .map(|p| ring_of(p.cell))
            .max()
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

/// Arranges `catalog` with `strategy`, one cell per exhibit in catalog order.
pub fn arrange<S: LayoutStrategy + ?Sized>(
    catalog: &Catalog,
    strategy: &S,
    config: &ArrangeConfig,
) -> Result<Arrangement> {
    config.validate()?;

    let expected = catalog.len();
    let cells: Vec<IVec2> = strategy
        .generate(expected)
        .into_iter()
        .map(IVec2::from)
        .collect();
    if cells.len() != expected {
        return Err(Error::LayoutMismatch {
            expected,
            actual: cells.len(),
        });
    }

    let placements: Vec<ExhibitPlacement> = catalog
        .iter()
        .zip(cells)
        .enumerate()
        .map(|(index, (exhibit, cell))| ExhibitPlacement {
            exhibit_id: exhibit.id.clone(),
            index,
            cell,
            world: config.world_position(cell),
        })
        .collect();

    debug!(
        exhibits = placements.len(),
        spacing = config.spacing,
        "arranged catalog"
    );

    Ok(Arrangement::new(placements, config.clone()))
}

/// Arranges `catalog` on the default counter-clockwise spiral.
pub fn arrange_spiral(catalog: &Catalog, config: &ArrangeConfig) -> Result<Arrangement> {
    arrange(catalog, &SpiralLayout::new(), config)
}

#[cfg(test)]
mod tests {
    use mint::Vector2;

    use super::*;
    use crate::exhibit::{Exhibit, GeoPoint};

    fn catalog(n: usize) -> Catalog {
        Catalog::new(
            (0..n)
                .map(|i| Exhibit::new(format!("obj-{i}"), format!("Object {i}"), GeoPoint::default()))
                .collect(),
        )
        .expect("unique ids")
    }

    #[test]
    fn config_builder_and_validation() {
        let cfg = ArrangeConfig::new()
            .with_spacing(2.0)
            .with_fill(0.5)
            .with_plane_z(-1.0);
        assert_eq!(cfg.spacing, 2.0);
        assert_eq!(cfg.fill, 0.5);
        assert_eq!(cfg.plane_z, -1.0);
        assert!(cfg.validate().is_ok());

        assert!(ArrangeConfig::new().with_spacing(0.0).validate().is_err());
        assert!(ArrangeConfig::new().with_spacing(f32::NAN).validate().is_err());
        assert!(ArrangeConfig::new().with_fill(0.0).validate().is_err());
        assert!(ArrangeConfig::new().with_fill(1.5).validate().is_err());
        assert!(ArrangeConfig::new().with_fill(1.0).validate().is_ok());
        assert!(ArrangeConfig::new()
            .with_plane_z(f32::INFINITY)
            .validate()
            .is_err());
    }

    #[test]
    fn catalog_order_follows_spiral_order() {
        let arrangement = arrange_spiral(&catalog(9), &ArrangeConfig::default()).expect("arranged");
        let cells: Vec<_> = arrangement.placements().iter().map(|p| p.cell).collect();
        assert_eq!(cells, crate::layout::generate(9));
        assert_eq!(arrangement.get("obj-2").map(|p| p.cell), Some(IVec2::new(1, 1)));
        assert_eq!(arrangement.get("obj-4").map(|p| p.index), Some(4));
        assert_eq!(arrangement.extent(), 1);
    }

    #[test]
    fn lookup_by_id_matches_catalog_position() {
        let catalog = catalog(50);
        let arrangement = arrange_spiral(&catalog, &ArrangeConfig::default()).expect("arranged");
        for (i, exhibit) in catalog.iter().enumerate() {
            let placement = arrangement.get(&exhibit.id).expect("placed");
            assert_eq!(placement.index, i);
            assert_eq!(placement.exhibit_id, exhibit.id);
            assert_eq!(placement.cell, arrangement.placements()[i].cell);
        }
        assert!(arrangement.get("obj-50").is_none());
        assert!(Arrangement::default().get("obj-0").is_none());
    }

    #[test]
    fn world_positions_use_spacing_and_plane() {
        let cfg = ArrangeConfig::new().with_spacing(1.5).with_plane_z(0.25);
        let arrangement = arrange_spiral(&catalog(3), &cfg).expect("arranged");
        assert_eq!(arrangement.placements()[0].world, Vec3::new(0.0, 0.0, 0.25));
        assert_eq!(arrangement.placements()[1].world, Vec3::new(1.5, 0.0, 0.25));
        assert_eq!(arrangement.placements()[2].world, Vec3::new(1.5, 1.5, 0.25));
    }

    #[test]
    fn empty_catalog_yields_empty_arrangement() {
        let arrangement = arrange_spiral(&catalog(0), &ArrangeConfig::default()).expect("arranged");
        assert!(arrangement.is_empty());
        assert_eq!(arrangement.extent(), 0);
    }

    #[test]
    fn invalid_config_is_rejected_before_layout() {
        let cfg = ArrangeConfig::new().with_fill(-0.1);
        let err = arrange_spiral(&catalog(2), &cfg).expect_err("invalid config");
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    struct ShortLayout;

    impl LayoutStrategy for ShortLayout {
        fn generate(&self, count: usize) -> Vec<Vector2<i32>> {
            vec![Vector2 { x: 0, y: 0 }; count.saturating_sub(1)]
        }
    }

    #[test]
    fn short_layouts_are_reported() {
        let err = arrange(&catalog(4), &ShortLayout, &ArrangeConfig::default())
            .expect_err("short layout");
        assert!(matches!(
            err,
            Error::LayoutMismatch {
                expected: 4,
                actual: 3
            }
        ));
    }

    #[test]
    fn fit_scale_uses_largest_side() {
        let s = fit_scale(Vec3::new(2.0, 0.5, 4.0), 0.9);
        assert!((s - 0.225).abs() < 1e-6);
        assert_eq!(fit_scale(Vec3::ZERO, 0.9), 1.0);
        assert_eq!(fit_scale(Vec3::new(f32::NAN, 1.0, 1.0), 0.9), 1.0);

        let cfg = ArrangeConfig::new().with_spacing(2.0);
        assert!((cfg.fit_scale(Vec3::splat(1.0)) - 1.8).abs() < 1e-6);
    }
}
