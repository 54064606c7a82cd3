#![allow(unused)]

use csv::StringRecord;
use terra_indicators::{IndicatorType, Sample, SampleValue, validate::{RowSchema, RowRejection, RawRecord, validate}};

const HEADERS: [&str; 5] = ["id", "date", "longitude", "latitude", "value"];

fn check (indicator: IndicatorType, row: &[&str])->Result<Sample,RowRejection> {
    let headers: Vec<&str> = HEADERS.iter().map( |h| if *h == "value" { indicator.value_column() } else { *h }).collect();
    let headers = StringRecord::from( headers);
    let row = StringRecord::from( row.to_vec());

    let schema = RowSchema::from_headers( &headers, indicator);
    validate( &schema.record(&row), indicator)
}

#[test]
fn test_valid_numeric_row() {
    let sample = check( IndicatorType::LST, &["p1", "2024-01-10", "29.0", "40.0", " 12.5 "]).unwrap();
    println!("{sample:?}");

    assert_eq!( sample.id.as_deref(), Some("p1"));
    assert_eq!( sample.raw_date, "2024-01-10");
    assert_eq!( sample.position.longitude_degrees(), 29.0);
    assert_eq!( sample.position.latitude_degrees(), 40.0);
    assert_eq!( sample.value, SampleValue::Numeric(12.5));
}

#[test]
fn test_raw_date_is_kept() {
    let sample = check( IndicatorType::NPP, &["", "2024-01-10 06:30:00", "29.0", "40.0", "0.8"]).unwrap();
    assert_eq!( sample.raw_date, "2024-01-10 06:30:00");
    assert_eq!( sample.date.to_rfc3339(), "2024-01-10T06:30:00+00:00");
    assert_eq!( sample.id, None);
}

#[test]
fn test_blank_id_is_kept() {
    // only an empty id is null, whitespace ids pass through unchanged
    let sample = check( IndicatorType::NPP, &[" ", "2024-01-10", "29.0", "40.0", "0.8"]).unwrap();
    assert_eq!( sample.id.as_deref(), Some(" "));
}

#[test]
fn test_invalid_coordinates() {
    assert_eq!( check( IndicatorType::LST, &["p", "2024-01-10", "", "40.0", "1"]), Err(RowRejection::InvalidCoordinates));
    assert_eq!( check( IndicatorType::LST, &["p", "2024-01-10", "29.0", "north", "1"]), Err(RowRejection::InvalidCoordinates));
    assert_eq!( check( IndicatorType::LST, &["p", "2024-01-10", "inf", "40.0", "1"]), Err(RowRejection::InvalidCoordinates));
    assert_eq!( check( IndicatorType::LST, &["p", "2024-01-10", "NaN", "40.0", "1"]), Err(RowRejection::InvalidCoordinates));
}

#[test]
fn test_numeric_no_data() {
    for v in ["", "   ", "-", "NULL", "null"] {
        let res = check( IndicatorType::NDVI, &["p", "2024-01-10", "29.0", "40.0", v]);
        assert!( matches!( res, Err(RowRejection::EmptyValue) | Err(RowRejection::NoDataValue)), "{v:?} accepted");
    }

    // sentinels are case sensitive, anything else is just not a number
    assert_eq!( check( IndicatorType::NDVI, &["p", "2024-01-10", "29.0", "40.0", "Null"]), Err(RowRejection::NonNumericValue));
    assert_eq!( check( IndicatorType::NDVI, &["p", "2024-01-10", "29.0", "40.0", "0.3abc"]), Err(RowRejection::NonNumericValue));
    assert_eq!( check( IndicatorType::NDVI, &["p", "2024-01-10", "29.0", "40.0", "inf"]), Err(RowRejection::NonNumericValue));
}

#[test]
fn test_no_numeric_prefix_parsing() {
    // the whole trimmed field has to be a number, a numeric prefix is not enough
    assert_eq!( check( IndicatorType::LST, &["p", "2024-01-10", "29.0", "40.0", "12.5abc"]), Err(RowRejection::NonNumericValue));
    assert_eq!( check( IndicatorType::LST, &["p", "2024-01-10", "29.0", "40.0N", "12.5"]), Err(RowRejection::InvalidCoordinates));
    assert_eq!( check( IndicatorType::LST, &["p", "2024-01-10", "29E", "40.0", "12.5"]), Err(RowRejection::InvalidCoordinates));
}

#[test]
fn test_zero_values() {
    assert_eq!( check( IndicatorType::TreeCover, &["p", "2024-01-10", "29.0", "40.0", "0"]), Err(RowRejection::ZeroTreeCover));
    assert_eq!( check( IndicatorType::TreeCover, &["p", "2024-01-10", "29.0", "40.0", "0.0"]), Err(RowRejection::ZeroTreeCover));

    for it in [IndicatorType::LST, IndicatorType::NPP, IndicatorType::NDVI, IndicatorType::TreeAnalysis] {
        let sample = check( it, &["p", "2024-01-10", "29.0", "40.0", "0"]).unwrap();
        assert_eq!( sample.value, SampleValue::Numeric(0.0));
    }
}

#[test]
fn test_categorical_values() {
    let sample = check( IndicatorType::LandCover, &["p", "2024-01-10", "29.0", "40.0", " Forest "]).unwrap();
    assert_eq!( sample.value, SampleValue::Category(" Forest ".to_string()));

    // numbers are just categories here
    let sample = check( IndicatorType::LandCover, &["p", "2024-01-10", "29.0", "40.0", "0"]).unwrap();
    assert_eq!( sample.value, SampleValue::Category("0".to_string()));

    assert_eq!( check( IndicatorType::LandCover, &["p", "2024-01-10", "29.0", "40.0", "  "]), Err(RowRejection::EmptyValue));
    assert_eq!( check( IndicatorType::LandCover, &["p", "2024-01-10", "29.0", "40.0", ""]), Err(RowRejection::EmptyValue));
}

#[test]
fn test_invalid_date() {
    assert_eq!( check( IndicatorType::LST, &["p", "10/01/2024", "29.0", "40.0", "3"]), Err(RowRejection::InvalidDate));
    assert_eq!( check( IndicatorType::LST, &["p", "", "29.0", "40.0", "3"]), Err(RowRejection::InvalidDate));
}

#[test]
fn test_check_order() {
    // coordinates are checked before values, values before dates
    assert_eq!( check( IndicatorType::LST, &["p", "bad", "x", "40.0", "bad"]), Err(RowRejection::InvalidCoordinates));
    assert_eq!( check( IndicatorType::LST, &["p", "bad", "29.0", "40.0", "bad"]), Err(RowRejection::NonNumericValue));
}

#[test]
fn test_missing_columns() {
    let headers = StringRecord::from( vec!["date", "longitude", "latitude", "NDVI_Value"]);
    let schema = RowSchema::from_headers( &headers, IndicatorType::LST);
    assert_eq!( schema.missing_columns(), vec!["LST_Celsius"]);

    let row = StringRecord::from( vec!["2024-01-10", "29.0", "40.0", "0.5"]);
    assert_eq!( validate( &schema.record(&row), IndicatorType::LST), Err(RowRejection::MissingColumn));

    // id is optional
    let schema = RowSchema::from_headers( &headers, IndicatorType::NDVI);
    assert!( schema.missing_columns().is_empty());
    let sample = validate( &schema.record(&row), IndicatorType::NDVI).unwrap();
    assert_eq!( sample.id, None);
}

#[test]
fn test_short_row() {
    let headers = StringRecord::from( vec!["id", "date", "longitude", "latitude", "NDVI_Value"]);
    let schema = RowSchema::from_headers( &headers, IndicatorType::NDVI);

    let row = StringRecord::from( vec!["p", "2024-01-10", "29.0", "40.0"]);
    assert_eq!( validate( &schema.record(&row), IndicatorType::NDVI), Err(RowRejection::MissingColumn));
}
