#[cfg(test)]
mod tests {
    use std::fs::File;
    use std::io::BufReader;
    use std::path::Path;

    use float_cmp::approx_eq;
    use test_case::test_case;

    use georel::context::CoordSystem;
    use georel::geometry::{GeometryError, SpatialRelation};
    use georel_cli::config::{AreaCalculatorKind, RelateConfig};
    use georel_cli::evaluate::evaluate;
    use georel_cli::io;
    use georel_cli::io::ext_repr::ExtShape;
    use georel_cli::io::import::Importer;

    use SpatialRelation::{Contains, Disjoint, Intersects, Within};

    fn read_config(path: &str) -> RelateConfig {
        let file = File::open(path).unwrap();
        serde_json::from_reader(BufReader::new(file)).unwrap()
    }

    const PLANAR: &[SpatialRelation] =
        &[Contains, Disjoint, Contains, Within, Disjoint, Intersects, Within];
    const DATELINE: &[SpatialRelation] = &[Contains, Contains, Disjoint, Contains, Contains, Within];

    #[test_case("../assets/planar_queries.json", CoordSystem::Cartesian, PLANAR; "planar")]
    #[test_case("../assets/dateline_queries.json", CoordSystem::Geodetic, DATELINE; "dateline")]
    fn test_query_set(path: &str, coord_system: CoordSystem, expected: &[SpatialRelation]) {
        let query_set = io::read_query_set(Path::new(path)).unwrap();
        let config = RelateConfig {
            coord_system,
            ..RelateConfig::default()
        };
        let results = evaluate(&query_set, &config.spatial_context()).unwrap();

        let relations = results.iter().map(|r| r.relation).collect::<Vec<_>>();
        assert_eq!(relations, expected);
        for (i, result) in results.iter().enumerate() {
            assert_eq!(result.id, i as u64);
        }
    }

    #[test]
    fn rect_subjects_are_summarized() {
        let query_set = io::read_query_set(Path::new("../assets/dateline_queries.json")).unwrap();
        let config = RelateConfig::default();
        let results = evaluate(&query_set, &config.spatial_context()).unwrap();

        let summary = results[0].subject_rect.as_ref().unwrap();
        assert_eq!(summary.repr, "Rect(minX=170.0,maxX=-170.0,minY=-10.0,maxY=10.0)");
        assert_eq!(summary.width, 20.0);
        assert_eq!(summary.height, 20.0);
        assert_eq!(summary.center, (180.0, 0.0));
        assert!(summary.crosses_dateline);
        assert!(summary.area < 400.0);

        //point subject
        assert!(results[5].subject_rect.is_none());
    }

    #[test]
    fn planar_config_from_file() {
        let config = read_config("../assets/planar_config.json");
        assert_eq!(config.coord_system, CoordSystem::Cartesian);
        assert_eq!(config.area_calculator, AreaCalculatorKind::Cartesian);

        let query_set = io::read_query_set(Path::new("../assets/planar_queries.json")).unwrap();
        let results = evaluate(&query_set, &config.spatial_context()).unwrap();
        let summary = results[0].subject_rect.as_ref().unwrap();
        assert!(approx_eq!(f64, summary.area, 200.0));
        assert!(!summary.crosses_dateline);
    }

    #[test]
    fn invalid_rect_fails_the_evaluation() {
        let query_set = io::read_query_set(Path::new("../assets/invalid_queries.json")).unwrap();
        let err = evaluate(&query_set, &RelateConfig::default().spatial_context()).unwrap_err();
        assert!(err.to_string().contains("query 0"));
        assert!(matches!(
            err.downcast_ref::<GeometryError>(),
            Some(GeometryError::InvalidYRange { .. })
        ));
    }

    #[test]
    fn missing_query_file() {
        assert!(io::read_query_set(Path::new("../assets/does_not_exist.json")).is_err());
    }

    #[test]
    fn ext_shape_format() {
        let json = r#"{"type": "rectangle",
            "data": {"x_min": 170.0, "x_max": -170.0, "y_min": 0.0, "y_max": 1.0}}"#;
        let shape: ExtShape = serde_json::from_str(json).unwrap();
        let importer = Importer::new(CoordSystem::Geodetic);
        let imported = importer.import_shape(&shape).unwrap();
        assert_eq!(
            imported.bbox(CoordSystem::Geodetic).unwrap().to_string(),
            "Rect(minX=170.0,maxX=-170.0,minY=0.0,maxY=1.0)"
        );

        let json = r#"{"type": "point", "data": {"x": 1.5, "y": 2.5}}"#;
        let point: ExtShape = serde_json::from_str(json).unwrap();
        assert_eq!(point, ExtShape::Point { x: 1.5, y: 2.5 });
    }

    #[test]
    fn relations_serialize_in_upper_case() {
        assert_eq!(serde_json::to_string(&Within).unwrap(), "\"WITHIN\"");
        let parsed: SpatialRelation = serde_json::from_str("\"INTERSECTS\"").unwrap();
        assert_eq!(parsed, Intersects);
    }
}
