//! Unit tests for fm-graph.
//!
//! All tests use hand-built levels or inline JSON so they need no fixtures.

#[cfg(test)]
mod helpers {
    use fm_core::{Point, VertexId};

    use crate::{Level, LevelBuilder};

    /// Three vertices in a row joined by lanes (0,1) and (1,2).
    pub fn line_level() -> Level {
        let mut b = LevelBuilder::new("L1");
        let v0 = b.add_vertex(Point::new(0.0, 0.0));
        let v1 = b.add_vertex(Point::new(1.0, 0.0));
        let v2 = b.add_vertex(Point::new(2.0, 0.0));
        b.add_lane(v0, v1);
        b.add_lane(v1, v2);
        b.build().unwrap()
    }

    /// Grid with a long way round and a disconnected island:
    ///
    /// ```text
    ///   0 - 1 - 2          5 - 6
    ///   |       |
    ///   3 ------- 4
    /// ```
    ///
    /// 0→4 is two hops via 3 and three hops via 1, 2.
    pub fn grid_level() -> (Level, [VertexId; 7]) {
        let mut b = LevelBuilder::new("L2");
        let v0 = b.add_vertex(Point::new(0.0, 0.0));
        let v1 = b.add_vertex(Point::new(1.0, 0.0));
        let v2 = b.add_vertex(Point::new(2.0, 0.0));
        let v3 = b.add_vertex(Point::new(0.0, -5.0));
        let v4 = b.add_vertex(Point::new(2.0, -5.0));
        let v5 = b.add_vertex(Point::new(10.0, 0.0));
        let v6 = b.add_vertex(Point::new(11.0, 0.0));
        b.add_lane(v0, v1);
        b.add_lane(v1, v2);
        b.add_lane(v2, v4);
        b.add_lane(v3, v0);
        b.add_lane(v3, v4);
        b.add_lane(v5, v6);
        (b.build().unwrap(), [v0, v1, v2, v3, v4, v5, v6])
    }
}

// ── Level structure ───────────────────────────────────────────────────────────

#[cfg(test)]
mod level {
    use fm_core::{Point, VertexId};

    use crate::{GraphError, Lane, LevelBuilder, VertexAttrs};

    #[test]
    fn vertices_are_indexed_in_input_order() {
        let level = super::helpers::line_level();
        assert_eq!(level.vertex_count(), 3);
        for (i, v) in level.vertices().iter().enumerate() {
            assert_eq!(v.id, VertexId(i as u32));
        }
        assert_eq!(level.lanes(), &[Lane::new(VertexId(0), VertexId(1)), Lane::new(VertexId(1), VertexId(2))]);
    }

    #[test]
    fn lanes_are_two_way_for_adjacency() {
        let level = super::helpers::line_level();
        assert_eq!(level.neighbors(VertexId(0)), &[VertexId(1)]);
        assert_eq!(level.neighbors(VertexId(1)), &[VertexId(0), VertexId(2)]);
        assert!(level.has_lane_between(VertexId(2), VertexId(1)));
        assert!(!level.has_lane_between(VertexId(0), VertexId(2)));
    }

    #[test]
    fn vertex_at_out_of_range() {
        let level = super::helpers::line_level();
        assert!(level.vertex_at(VertexId(2)).is_ok());
        let err = level.vertex_at(VertexId(3)).unwrap_err();
        assert!(matches!(err, GraphError::VertexOutOfRange { index: 3, len: 3, .. }));
    }

    #[test]
    fn lane_with_bad_endpoint_rejected() {
        let mut b = LevelBuilder::new("L1");
        let v0 = b.add_vertex(Point::new(0.0, 0.0));
        b.add_lane(v0, VertexId(9));
        assert!(matches!(b.build(), Err(GraphError::Parse(_))));
    }

    #[test]
    fn chargers_and_names() {
        let mut b = LevelBuilder::new("L1");
        b.add_vertex(Point::new(0.0, 0.0));
        b.add_vertex_with(
            Point::new(1.0, 0.0),
            VertexAttrs { name: Some("dock".into()), is_charger: true },
        );
        let level = b.build().unwrap();
        assert_eq!(level.chargers().collect::<Vec<_>>(), vec![VertexId(1)]);
        assert_eq!(level.vertex_by_name("dock").map(|v| v.id), Some(VertexId(1)));
        assert!(level.vertex_by_name("nowhere").is_none());
    }

    #[test]
    fn reversed_lane() {
        let lane = Lane::new(VertexId(3), VertexId(4));
        assert_eq!(lane.reversed(), Lane::new(VertexId(4), VertexId(3)));
        assert_eq!(lane.to_string(), "3->4");
    }
}

// ── Routing ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod routing {
    use fm_core::{Point, VertexId};

    use crate::Level;

    /// Every consecutive pair of a route must be joined by a lane.
    fn assert_valid(level: &Level, path: &[VertexId], from: VertexId, to: VertexId) {
        assert_eq!(path.first(), Some(&from));
        assert_eq!(path.last(), Some(&to));
        for pair in path.windows(2) {
            assert!(level.has_lane_between(pair[0], pair[1]), "{:?} not a lane", pair);
        }
    }

    #[test]
    fn line_path() {
        let level = super::helpers::line_level();
        let route = level.shortest_path(VertexId(0), VertexId(2)).unwrap();
        assert_eq!(route.vertices, vec![VertexId(0), VertexId(1), VertexId(2)]);
        assert_eq!(
            route.coords,
            vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(2.0, 0.0)]
        );
        assert_eq!(route.hop_count(), 2);
    }

    #[test]
    fn reverse_direction_is_traversable() {
        let level = super::helpers::line_level();
        let route = level.shortest_path(VertexId(2), VertexId(0)).unwrap();
        assert_eq!(route.vertices, vec![VertexId(2), VertexId(1), VertexId(0)]);
    }

    #[test]
    fn fewest_hops_not_shortest_distance() {
        // 0→3→4 is 2 hops and 7 units; 0→1→2→4 is 3 hops and also 7 units.
        let (level, [v0, _, _, v3, v4, _, _]) = super::helpers::grid_level();
        let route = level.shortest_path(v0, v4).unwrap();
        assert_eq!(route.vertices, vec![v0, v3, v4]);
        assert_valid(&level, &route.vertices, v0, v4);
    }

    #[test]
    fn every_reachable_pair_is_valid() {
        let (level, ids) = super::helpers::grid_level();
        for &a in &ids[..5] {
            for &b in &ids[..5] {
                if a == b {
                    continue;
                }
                let route = level.shortest_path(a, b).unwrap();
                assert!(!route.is_empty());
                assert_valid(&level, &route.vertices, a, b);
            }
        }
    }

    #[test]
    fn disconnected_returns_empty() {
        let (level, [v0, .., v6]) = super::helpers::grid_level();
        let route = level.shortest_path(v0, v6).unwrap();
        assert!(route.is_empty());
        assert!(route.coords.is_empty());
        assert_eq!(route.hop_count(), 0);
    }

    #[test]
    fn same_vertex_is_trivial() {
        let level = super::helpers::line_level();
        let route = level.shortest_path(VertexId(1), VertexId(1)).unwrap();
        assert_eq!(route.vertices, vec![VertexId(1)]);
        assert_eq!(route.hop_count(), 0);
    }

    #[test]
    fn out_of_range_endpoint_is_error() {
        let level = super::helpers::line_level();
        assert!(level.shortest_path(VertexId(0), VertexId(7)).is_err());
    }
}

// ── Nearest vertex ────────────────────────────────────────────────────────────

#[cfg(test)]
mod nearest {
    use fm_core::{Point, VertexId};

    use crate::{nearest_vertex, LevelBuilder};

    #[test]
    fn picks_closest() {
        let level = super::helpers::line_level();
        assert_eq!(level.nearest_vertex(Point::new(1.2, 0.3)), Some(VertexId(1)));
        assert_eq!(level.nearest_vertex(Point::new(-4.0, 0.0)), Some(VertexId(0)));
    }

    #[test]
    fn tie_breaks_on_first_index() {
        let level = super::helpers::line_level();
        // Exactly halfway between 0 and 1.
        assert_eq!(level.nearest_vertex(Point::new(0.5, 0.0)), Some(VertexId(0)));
        assert_eq!(level.nearest_vertex(Point::new(1.5, 0.0)), Some(VertexId(1)));
    }

    #[test]
    fn empty_is_none() {
        assert_eq!(nearest_vertex(Point::ORIGIN, &[]), None);
        let level = LevelBuilder::new("empty").build().unwrap();
        assert_eq!(level.nearest_vertex(Point::ORIGIN), None);
    }
}

// ── NavGraph ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod nav_graph {
    use fm_core::VertexId;

    use crate::{GraphError, LevelBuilder, NavGraphBuilder};

    #[test]
    fn levels_are_independent() {
        let (grid, _) = super::helpers::grid_level();
        let mut b = NavGraphBuilder::new("depot");
        b.add_level(super::helpers::line_level()).unwrap();
        b.add_level(grid).unwrap();
        let graph = b.build();

        assert_eq!(graph.building_name(), "depot");
        assert_eq!(graph.level_names().collect::<Vec<_>>(), vec!["L1", "L2"]);
        assert_eq!(graph.vertices("L1").unwrap().len(), 3);
        assert_eq!(graph.vertices("L2").unwrap().len(), 7);
        assert_eq!(graph.lanes("L2").unwrap().len(), 6);
        assert_eq!(graph.vertex_at("L1", 2).unwrap().id, VertexId(2));
        assert!(matches!(graph.vertex_at("L1", 3), Err(GraphError::VertexOutOfRange { .. })));
        assert!(matches!(graph.vertices("L9"), Err(GraphError::LevelNotFound(_))));

        let route = graph.shortest_path("L1", VertexId(0), VertexId(2)).unwrap();
        assert_eq!(route.hop_count(), 2);
    }

    #[test]
    fn duplicate_level_rejected() {
        let mut b = NavGraphBuilder::new("depot");
        b.add_level(LevelBuilder::new("L1").build().unwrap()).unwrap();
        assert!(b.add_level(LevelBuilder::new("L1").build().unwrap()).is_err());
    }
}

// ── JSON loader ───────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "json"))]
mod loader {
    use fm_core::{Point, VertexId};

    use crate::{load_nav_graph, load_nav_graph_reader, load_nav_graph_str, GraphError};

    const SAMPLE: &str = r#"{
        "building_name": "depot",
        "levels": {
            "level_b": {
                "vertices": [[0.0, 0.0], [1, 0]],
                "lanes": [[0, 1]]
            },
            "level_a": {
                "vertices": [
                    [0.0, 0.0, {"name": "dock", "is_charger": true}],
                    [2.5, -1.0, {"name": "", "speed": 3}],
                    [5.0, 0.0]
                ],
                "lanes": [[0, 1, {"speed_limit": 0.0}], [1, 2, {}]]
            }
        }
    }"#;

    #[test]
    fn parses_levels_in_file_order() {
        let graph = load_nav_graph_str(SAMPLE).unwrap();
        assert_eq!(graph.building_name(), "depot");
        assert_eq!(graph.level_names().collect::<Vec<_>>(), vec!["level_b", "level_a"]);
    }

    #[test]
    fn parses_vertex_attributes() {
        let graph = load_nav_graph_str(SAMPLE).unwrap();
        let level = graph.level("level_a").unwrap();
        let dock = level.vertex_at(VertexId(0)).unwrap();
        assert_eq!(dock.name(), Some("dock"));
        assert!(dock.is_charger());
        let unnamed = level.vertex_at(VertexId(1)).unwrap();
        assert_eq!(unnamed.name(), None);
        assert!(!unnamed.is_charger());
        assert_eq!(unnamed.pos, Point::new(2.5, -1.0));
        assert_eq!(level.lane_count(), 2);
    }

    #[test]
    fn routes_over_loaded_level() {
        let graph = load_nav_graph_str(SAMPLE).unwrap();
        let route = graph.shortest_path("level_a", VertexId(0), VertexId(2)).unwrap();
        assert_eq!(route.vertices, vec![VertexId(0), VertexId(1), VertexId(2)]);
    }

    #[test]
    fn missing_building_name_defaults() {
        let graph = load_nav_graph_str(r#"{"levels": {}}"#).unwrap();
        assert_eq!(graph.building_name(), "Unknown");
        assert_eq!(graph.level_count(), 0);
    }

    #[test]
    fn lane_out_of_range_rejected() {
        let json = r#"{"levels": {"L1": {"vertices": [[0, 0]], "lanes": [[0, 4]]}}}"#;
        assert!(matches!(load_nav_graph_str(json), Err(GraphError::Parse(_))));
    }

    #[test]
    fn malformed_json_rejected() {
        assert!(matches!(load_nav_graph_str("{not json"), Err(GraphError::Json(_))));
        let bad_vertex = r#"{"levels": {"L1": {"vertices": [["x", 0]]}}}"#;
        assert!(matches!(load_nav_graph_str(bad_vertex), Err(GraphError::Parse(_))));
    }

    #[test]
    fn reader_and_missing_file() {
        let graph = load_nav_graph_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(graph.level_count(), 2);
        let err = load_nav_graph(std::path::Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, GraphError::Io(_)));
    }
}
