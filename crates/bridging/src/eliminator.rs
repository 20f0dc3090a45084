use crate::{
    boundary_winding, find_visible_edge, rank_holes, ray_length, select_bridge_point, splice_hole,
};
use crate::{
    BoundaryList, BridgeKind, BridgeOptions, EliminationResult, HoleEliminationError, HoleRank,
    PolygonWithHoles, UnsupportedParameter, VertexId,
};

use alloc::vec::Vec;

#[cfg(debug_assertions)]
macro_rules! bridge_log {
    ($obj:ident, $fmt:expr) => (
        if $obj.log {
            log::debug!($fmt);
        }
    );
    ($obj:ident, $fmt:expr, $($arg:tt)*) => (
        if $obj.log {
            log::debug!($fmt, $($arg)*);
        }
    );
}

#[cfg(not(debug_assertions))]
macro_rules! bridge_log {
    ($obj:ident, $fmt:expr) => {};
    ($obj:ident, $fmt:expr, $($arg:tt)*) => {};
}

/// A connection between a hole and the boundary it was merged into.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Bridge {
    /// Index of the hole in the polygon.
    pub hole: usize,
    /// The rightmost vertex of the hole.
    pub hole_vertex: VertexId,
    /// The boundary vertex the hole is connected to.
    pub boundary_vertex: VertexId,
    pub kind: BridgeKind,
}

/// Merges the holes of a polygon into its outer contour.
///
/// The eliminator keeps its internal buffers between runs, so reusing one
/// instance for many polygons avoids allocations.
///
/// ## Example
///
/// ```
/// use keyhole_bridging::{BoundaryList, BridgeKind, BridgeOptions, HoleEliminator};
/// use keyhole_bridging::{PolygonWithHoles, VertexId};
/// use keyhole_bridging::math::point;
///
/// let polygon = PolygonWithHoles::from_rings(
///     &[point(0.0, 0.0), point(10.0, 0.0), point(10.0, 10.0), point(0.0, 10.0)],
///     &[[point(4.0, 4.0), point(4.0, 6.0), point(6.0, 5.0)]],
/// );
///
/// let mut eliminator = HoleEliminator::new();
/// let mut output = BoundaryList::new();
/// eliminator.eliminate_holes(&polygon, &BridgeOptions::DEFAULT, &mut output).unwrap();
///
/// assert_eq!(output.len(), 4 + 3 + 2);
///
/// let bridge = eliminator.bridges()[0];
/// assert_eq!(bridge.hole_vertex, VertexId(6));
/// assert_eq!(bridge.boundary_vertex, VertexId(1));
/// assert_eq!(bridge.kind, BridgeKind::EdgeEndpoint);
/// ```
pub struct HoleEliminator {
    ranking: Vec<HoleRank>,
    bridges: Vec<Bridge>,
    #[cfg_attr(not(debug_assertions), allow(dead_code))]
    log: bool,
}

impl Default for HoleEliminator {
    fn default() -> Self {
        Self::new()
    }
}

impl HoleEliminator {
    pub fn new() -> Self {
        #[cfg(all(debug_assertions, feature = "std"))]
        let log = std::env::var("KEYHOLE_FORCE_LOGGING").is_ok();
        #[cfg(not(all(debug_assertions, feature = "std")))]
        let log = false;

        HoleEliminator {
            ranking: Vec::new(),
            bridges: Vec::new(),
            log,
        }
    }

    /// Enable or disable the debug log records emitted during the next runs.
    ///
    /// Records are only produced in debug builds and go through the `log`
    /// crate at the `debug` level.
    pub fn set_logging(&mut self, is_enabled: bool) {
        #[cfg(all(debug_assertions, feature = "std"))]
        let forced = std::env::var("KEYHOLE_FORCE_LOGGING").is_ok();

        #[cfg(not(all(debug_assertions, feature = "std")))]
        let forced = false;

        self.log = is_enabled || forced;
    }

    /// The bridges created by the last run, in the order the holes were merged.
    pub fn bridges(&self) -> &[Bridge] {
        &self.bridges
    }

    /// Writes into `output` a single contour visiting the outer contour and
    /// all of the holes of `polygon`.
    ///
    /// `output` is cleared first. If an error is returned, its content must
    /// not be used.
    pub fn eliminate_holes(
        &mut self,
        polygon: &PolygonWithHoles,
        options: &BridgeOptions,
        output: &mut BoundaryList,
    ) -> EliminationResult {
        self.bridges.clear();
        output.clear();

        validate_options(options)?;
        polygon.validate()?;

        let options = options.with_contour_winding(boundary_winding(polygon, options));

        let num_hole_points: usize = polygon.holes().iter().map(|h| h.len as usize + 2).sum();
        output.reserve(polygon.num_contour_points() + num_hole_points);
        for idx in 0..polygon.num_contour_points() {
            output.push_back(VertexId::from_usize(idx));
        }

        bridge_log!(
            self,
            "eliminating {} holes, contour of {} points, winding {:?}",
            polygon.num_holes(),
            polygon.num_contour_points(),
            options.contour_winding
        );

        let ray_length = ray_length(polygon);
        rank_holes(polygon, &mut self.ranking);

        for idx in 0..self.ranking.len() {
            let rank = self.ranking[idx];
            self.merge_hole(polygon, &rank, ray_length, &options, output)?;
        }

        Ok(())
    }

    fn merge_hole(
        &mut self,
        polygon: &PolygonWithHoles,
        rank: &HoleRank,
        ray_length: f32,
        options: &BridgeOptions,
        output: &mut BoundaryList,
    ) -> EliminationResult {
        let hole_vertex = rank.vertex(polygon);
        let origin = polygon.vertex(hole_vertex);

        let hit = find_visible_edge(polygon, output, origin, ray_length)
            .ok_or(HoleEliminationError::NoVisibleEdge { hole: rank.hole })?;

        bridge_log!(
            self,
            "hole #{} from {:?} at {:?}: ray hits the edge after {:?} at {:?}",
            rank.hole,
            hole_vertex,
            origin,
            output.vertex(hit.edge_from),
            hit.position
        );

        let bridge = select_bridge_point(polygon, output, origin, &hit, options);
        let boundary_vertex = output.vertex(bridge.position);

        bridge_log!(
            self,
            " -> bridge to {:?} at {:?} ({:?})",
            boundary_vertex,
            polygon.vertex(boundary_vertex),
            bridge.kind
        );

        splice_hole(output, bridge.position, polygon, rank);

        self.bridges.push(Bridge {
            hole: rank.hole,
            hole_vertex,
            boundary_vertex,
            kind: bridge.kind,
        });

        Ok(())
    }
}

fn validate_options(options: &BridgeOptions) -> Result<(), UnsupportedParameter> {
    if options.epsilon.is_nan() || options.angle_epsilon.is_nan() {
        return Err(UnsupportedParameter::EpsilonIsNaN);
    }

    if options.epsilon < 0.0 || options.angle_epsilon < 0.0 {
        return Err(UnsupportedParameter::NegativeEpsilon);
    }

    Ok(())
}

/// Merges the holes of a polygon into its outer contour using a temporary
/// [`HoleEliminator`].
pub fn eliminate_holes(
    polygon: &PolygonWithHoles,
    options: &BridgeOptions,
) -> Result<BoundaryList, HoleEliminationError> {
    let mut output = BoundaryList::new();
    HoleEliminator::new().eliminate_holes(polygon, options, &mut output)?;

    Ok(output)
}

#[test]
fn invalid_options() {
    use crate::math::point;

    let polygon = PolygonWithHoles::new(&[point(0.0, 0.0), point(1.0, 0.0), point(0.0, 1.0)]);

    assert_eq!(
        eliminate_holes(&polygon, &BridgeOptions::epsilon(f32::NAN)).err(),
        Some(UnsupportedParameter::EpsilonIsNaN.into())
    );
    assert_eq!(
        eliminate_holes(&polygon, &BridgeOptions::DEFAULT.with_angle_epsilon(-1.0)).err(),
        Some(UnsupportedParameter::NegativeEpsilon.into())
    );
    assert!(eliminate_holes(&polygon, &BridgeOptions::epsilon(0.0)).is_ok());
}

#[test]
fn no_holes() {
    use crate::math::point;

    let polygon = PolygonWithHoles::new(&[point(0.0, 0.0), point(1.0, 0.0), point(0.0, 1.0)]);
    let mut eliminator = HoleEliminator::new();
    let mut output = BoundaryList::new();
    output.push_back(VertexId(42));

    eliminator
        .eliminate_holes(&polygon, &BridgeOptions::DEFAULT, &mut output)
        .unwrap();

    assert_eq!(output.to_vec(), alloc::vec![VertexId(0), VertexId(1), VertexId(2)]);
    assert!(eliminator.bridges().is_empty());
}
