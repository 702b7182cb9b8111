#[cfg(test)]
mod tests {
    use ecopower_dashboard::hooks::FetchState;
    use ecopower_dashboard::models::{
        climate::{ClimatePoint, ClimateSeries, MAX_DISPLAY_POINTS, TimelineResponse},
        country::{Country, Page, total_pages},
        error::AppError,
        hydro::HydroSummary,
        metrics::{TimeseriesPoint, TimeseriesResponse},
        snapshot::SnapshotAck,
        stats::StatsSummary,
    };
    use ecopower_dashboard::services::api::{ClimateQuery, CountryQuery};
    use std::rc::Rc;

    fn series_with_points(count: usize) -> ClimateSeries {
        ClimateSeries {
            id: 1,
            country_iso3: Some("BEN".to_string()),
            variable: "rainfall".to_string(),
            unit: "mm".to_string(),
            points: (0..count)
                .map(|i| ClimatePoint {
                    timestamp: format!("2024-01-{:02}", i % 28 + 1),
                    value: i as f64,
                })
                .collect(),
        }
    }

    // ===== Error Type Tests =====

    #[test]
    fn test_status_error_matches_api_format() {
        let error = AppError::Status {
            status: 404,
            detail: "not found".to_string(),
        };
        assert_eq!(error.to_string(), "API 404: not found");
    }

    #[test]
    fn test_network_error_display() {
        let error = AppError::Network("connection refused".to_string());
        assert_eq!(error.to_string(), "Network error: connection refused");
    }

    // ===== Pagination Tests =====

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(45, 10), 5);
    }

    #[test]
    fn test_total_pages_exact_multiple() {
        assert_eq!(total_pages(40, 10), 4);
    }

    #[test]
    fn test_total_pages_floors_at_one() {
        assert_eq!(total_pages(0, 10), 1);
    }

    #[test]
    fn test_page_total_pages_uses_count_not_results() {
        let page: Page<Country> = Page {
            results: Vec::new(),
            count: 101,
        };
        assert_eq!(page.total_pages(20), 6);
    }

    #[test]
    fn test_search_resets_page_in_same_update() {
        let query = CountryQuery {
            page: 7,
            ..CountryQuery::default()
        };
        let updated = query.with_search("ben".to_string());
        assert_eq!(updated.page, 1);
        assert_eq!(updated.search, "ben");
        assert_eq!(updated.page_size, query.page_size);
    }

    #[test]
    fn test_prev_page_stops_at_one() {
        let query = CountryQuery::default();
        assert_eq!(query.prev_page().page, 1);

        let query = CountryQuery {
            page: 3,
            ..CountryQuery::default()
        };
        assert_eq!(query.prev_page().page, 2);
    }

    #[test]
    fn test_next_page_stops_at_last() {
        let query = CountryQuery {
            page: 5,
            ..CountryQuery::default()
        };
        assert_eq!(query.next_page(5).page, 5);
        assert_eq!(query.next_page(8).page, 6);
    }

    #[test]
    fn test_pagination_bounds_disable_buttons() {
        let first = CountryQuery::default();
        assert!(!first.can_go_prev());
        assert!(first.can_go_next(3));

        let last = CountryQuery {
            page: 3,
            ..CountryQuery::default()
        };
        assert!(last.can_go_prev());
        assert!(!last.can_go_next(3));
    }

    #[test]
    fn test_climate_limit_clamped_on_commit() {
        assert_eq!(ClimateQuery::clamp_limit("100"), 100);
        assert_eq!(ClimateQuery::clamp_limit("7"), 50);
        assert_eq!(ClimateQuery::clamp_limit("9999"), 2000);
        assert_eq!(ClimateQuery::clamp_limit("abc"), 200);
    }

    // ===== Model Deserialization Tests =====

    #[test]
    fn test_country_page_deserialization() {
        let json = r#"{
            "count": 2,
            "results": [
                {"id": 1, "name": "Benin", "iso3": "BEN", "population": 13000000, "site_count": 4},
                {"id": 2, "name": "Togo", "iso3": "TGO"}
            ]
        }"#;

        let page: Page<Country> = serde_json::from_str(json).unwrap();
        assert_eq!(page.count, 2);
        assert_eq!(page.results[0].site_count, Some(4));
        assert_eq!(page.results[1].population, None);
    }

    #[test]
    fn test_page_defaults_when_fields_absent() {
        let page: Page<Country> = serde_json::from_str("{}").unwrap();
        assert!(page.results.is_empty());
        assert_eq!(page.count, 0);
    }

    #[test]
    fn test_stats_summary_deserialization() {
        let json = r#"{
            "dataset_count": 3,
            "countries": [{"name": "Benin", "iso3": "BEN", "site_count": 4}],
            "resources": [{"resource_type": "solar", "total": 346.8, "metrics": 2}]
        }"#;

        let stats: StatsSummary = serde_json::from_str(json).unwrap();
        assert_eq!(stats.dataset_count, 3);
        assert_eq!(stats.countries[0].iso3, "BEN");
        assert_eq!(stats.resources[0].total, Some(346.8));
    }

    #[test]
    fn test_stats_summary_tolerates_missing_fields() {
        let stats: StatsSummary = serde_json::from_str("{}").unwrap();
        assert_eq!(stats.dataset_count, 0);
        assert!(stats.countries.is_empty());
    }

    #[test]
    fn test_hydro_summary_decodes_orm_lookup_keys() {
        let json = r#"{
            "total_sites": 12,
            "total_storage_mwh": 5400.5,
            "total_capacity_mw": 820.0,
            "top_countries": [
                {"country__iso3": "BEN", "country__name": "Benin", "site_count": 7}
            ]
        }"#;

        let summary: HydroSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.total_sites, 12);
        assert_eq!(summary.top_countries[0].iso3, "BEN");
        assert_eq!(summary.top_countries[0].name, "Benin");
    }

    #[test]
    fn test_snapshot_ack_deserialization() {
        let ack: SnapshotAck = serde_json::from_str(r#"{"task_id": "abc"}"#).unwrap();
        assert_eq!(ack.task_id, "abc");
    }

    // ===== Timeseries Tests =====

    #[test]
    fn test_point_label_from_year() {
        let point = TimeseriesPoint {
            year: Some(2024),
            total_value: 223.4,
        };
        assert_eq!(point.label(), "2024");
    }

    #[test]
    fn test_point_label_falls_back_when_year_absent() {
        let point = TimeseriesPoint {
            year: None,
            total_value: 1.0,
        };
        assert_eq!(point.label(), "n/a");
    }

    #[test]
    fn test_series_data_preserves_response_order() {
        let json = r#"{
            "results": [
                {"year": 2023, "total_value": 123.4},
                {"total_value": 10.0},
                {"year": 2024, "total_value": 223.4}
            ]
        }"#;

        let response: TimeseriesResponse = serde_json::from_str(json).unwrap();
        let (labels, values) = response.series_data();

        assert_eq!(labels, vec!["2023", "n/a", "2024"]);
        assert_eq!(values, vec![123.4, 10.0, 223.4]);
    }

    // ===== Climate Timeline Tests =====

    #[test]
    fn test_display_points_caps_long_series() {
        let series = series_with_points(45);
        assert_eq!(series.display_points().len(), MAX_DISPLAY_POINTS);
    }

    #[test]
    fn test_display_points_keeps_short_series_whole() {
        let series = series_with_points(5);
        assert_eq!(series.display_points().len(), 5);
    }

    #[test]
    fn test_display_points_keeps_leading_points() {
        let series = series_with_points(45);
        assert_eq!(series.display_points()[0].value, 0.0);
        assert_eq!(series.display_points()[29].value, 29.0);
    }

    #[test]
    fn test_point_detail_combines_timestamp_and_value() {
        let point = ClimatePoint {
            timestamp: "2024-01-01".to_string(),
            value: 12.5,
        };
        assert_eq!(point.detail(), "2024-01-01 → 12.5");
    }

    #[test]
    fn test_series_heading_with_and_without_unit() {
        let series = series_with_points(1);
        assert_eq!(series.heading(), "rainfall (mm)");

        let unitless = ClimateSeries {
            unit: String::new(),
            ..series
        };
        assert_eq!(unitless.heading(), "rainfall");
    }

    #[test]
    fn test_timeline_tolerates_missing_points() {
        let json = r#"{"results": [{"id": 9, "variable": "rainfall"}]}"#;
        let response: TimelineResponse = serde_json::from_str(json).unwrap();
        assert!(response.results[0].points.is_empty());
        assert!(response.results[0].country_iso3.is_none());
    }

    // ===== Snapshot Status Tests =====

    #[test]
    fn test_snapshot_status_message() {
        let ack = SnapshotAck {
            task_id: "abc".to_string(),
        };
        assert_eq!(ack.status_message(), "Tâche planifiée (id: abc)");
    }

    // ===== Fetch State Tests =====

    #[test]
    fn test_fetch_state_default_is_loading() {
        let state: FetchState<StatsSummary> = FetchState::default();
        assert!(state.is_loading());
        assert!(state.data().is_none());
        assert!(state.error().is_none());
    }

    #[test]
    fn test_fetch_state_loaded_exposes_data() {
        let state = FetchState::Loaded(Rc::new(StatsSummary::default()));
        assert!(!state.is_loading());
        assert!(state.data().is_some());
    }

    #[test]
    fn test_fetch_state_error_suppresses_data() {
        let state: FetchState<StatsSummary> = FetchState::Error("API 404: not found".to_string());
        assert_eq!(state.error(), Some("API 404: not found"));
        assert!(state.data().is_none());
    }
}
