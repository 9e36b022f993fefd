#[cfg(test)]
mod tests {
    use crate::parsing::json_rows::parse_flight_rows_str;
    use chrono::NaiveDate;

    #[test]
    fn test_parse_two_rows() {
        let json = r#"[
            {
                "date": "2024-03-01",
                "aircraftType": "C172",
                "registration": "C-GABC",
                "picName": "Self",
                "route": "CYKZ-CYPQ-CYKZ",
                "seDayPic": 2.0,
                "xcDayPic": 2.0,
                "dayTakeoffsLandings": 2,
                "flightHours": 2.0
            },
            {
                "date": "2024-03-05",
                "aircraftType": "PA44",
                "registration": "C-FXYZ",
                "picName": "J. Doe",
                "otherCrew": "Self",
                "meDayDual": 1.3,
                "flightHours": 1.3
            }
        ]"#;

        let flights = parse_flight_rows_str(json).unwrap();
        assert_eq!(flights.len(), 2);

        assert_eq!(flights[0].id.0, 1);
        assert_eq!(
            flights[0].date,
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
        assert_eq!(flights[0].aircraft_type, "C172");
        assert_eq!(flights[0].route.as_deref(), Some("CYKZ-CYPQ-CYKZ"));
        assert_eq!(flights[0].buckets.se_day_pic, Some(2.0));
        assert_eq!(flights[0].buckets.xc_day_pic, Some(2.0));
        assert_eq!(flights[0].buckets.day_takeoffs_landings, Some(2));
        assert_eq!(flights[0].flight_hours, 2.0);

        assert_eq!(flights[1].id.0, 2);
        assert_eq!(flights[1].other_crew.as_deref(), Some("Self"));
        assert_eq!(flights[1].buckets.me_day_dual, Some(1.3));
        assert_eq!(flights[1].buckets.se_day_pic, None);
    }

    #[test]
    fn test_supplied_flight_hours_kept_verbatim() {
        // The source claims 2.0h over a 1.5h bucket sum; the import must not
        // repair it, validation reports it
        let json = r#"[
            {"date": "2024-03-01", "aircraftType": "C172", "registration": "C-GABC",
             "seDayPic": 1.5, "flightHours": 2.0}
        ]"#;

        let flights = parse_flight_rows_str(json).unwrap();
        assert_eq!(flights[0].flight_hours, 2.0);
        assert_eq!(flights[0].buckets.aircraft_total(), 1.5);
    }

    #[test]
    fn test_missing_flight_hours_computed_from_buckets() {
        let json = r#"[
            {"date": "2024-03-01", "aircraftType": "C172", "registration": "C-GABC",
             "seDayPic": 1.2, "seDayDual": 0.3}
        ]"#;

        let flights = parse_flight_rows_str(json).unwrap();
        assert_eq!(flights[0].flight_hours, 1.5);
    }

    #[test]
    fn test_simulator_row_computes_zero_flight_hours() {
        let json = r#"[
            {"date": "2024-03-01", "aircraftType": "ALSIM", "registration": "SIM-1",
             "simulator": 1.5}
        ]"#;

        let flights = parse_flight_rows_str(json).unwrap();
        assert_eq!(flights[0].flight_hours, 0.0);
        assert_eq!(flights[0].buckets.simulator, Some(1.5));
        assert!(flights[0].is_simulator_only());
    }

    #[test]
    fn test_blank_fields_import_as_empty() {
        let json = r#"[
            {"date": "2024-03-01", "seDayPic": 1.0, "flightHours": 1.0}
        ]"#;

        let flights = parse_flight_rows_str(json).unwrap();
        assert_eq!(flights[0].aircraft_type, "");
        assert_eq!(flights[0].registration, "");
        assert_eq!(flights[0].pic_name, "");
        assert_eq!(flights[0].other_crew, None);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let json = r#"[
            {"date": "2024-03-01", "aircraftType": "C172", "registration": "C-GABC",
             "seDayPic": 1.0, "flightHours": 1.0, "sourceSheet": "2024", "rowIndex": 17}
        ]"#;

        let flights = parse_flight_rows_str(json).unwrap();
        assert_eq!(flights.len(), 1);
    }

    #[test]
    fn test_invalid_date_names_the_row() {
        let json = r#"[
            {"date": "2024-03-01", "aircraftType": "C172", "registration": "C-GABC",
             "seDayPic": 1.0, "flightHours": 1.0},
            {"date": "03/15/2024", "aircraftType": "C172", "registration": "C-GABC",
             "seDayPic": 1.0, "flightHours": 1.0}
        ]"#;

        let err = parse_flight_rows_str(json).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("row 2"), "unexpected error: {}", message);
        assert!(message.contains("03/15/2024"), "unexpected error: {}", message);
    }

    #[test]
    fn test_malformed_document_is_an_error() {
        let err = parse_flight_rows_str("{\"not\": \"an array\"}").unwrap_err();
        assert!(err.to_string().contains("invalid flight rows JSON"));

        let err = parse_flight_rows_str("[{\"aircraftType\": \"C172\"}]").unwrap_err();
        assert!(err.to_string().contains("invalid flight rows JSON"));
    }
}
