use super::{FormData, ValidationErrors, required};
use crate::datetime::parse_timestamp;
use crate::models::show::ShowInput;

fn positive_id(errors: &mut ValidationErrors, form: &FormData, field: &'static str) -> i32 {
    let raw = required(errors, form, field);
    if raw.is_empty() {
        return 0;
    }
    match raw.parse::<i32>() {
        Ok(id) if id > 0 => id,
        _ => {
            errors.add(field, "Must be a positive whole number.");
            0
        }
    }
}

/// Validates a show submission. Whether the ids exist is checked when the
/// show is stored.
pub fn validate(form: &FormData) -> Result<ShowInput, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let artist_id = positive_id(&mut errors, form, "artist_id");
    let venue_id = positive_id(&mut errors, form, "venue_id");

    let raw_start = required(&mut errors, form, "start_time");
    let start_time = parse_timestamp(&raw_start);
    if start_time.is_none() && !raw_start.is_empty() {
        errors.add("start_time", "Not a valid datetime value.");
    }

    match start_time {
        Some(start_time) if errors.is_empty() => Ok(ShowInput {
            venue_id,
            artist_id,
            start_time,
        }),
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn accepts_datetime_local_value() {
        let form = FormData::parse(b"artist_id=4&venue_id=1&start_time=2035-04-01T20%3A00");
        let input = validate(&form).unwrap();

        assert_eq!(input.artist_id, 4);
        assert_eq!(input.venue_id, 1);
        assert_eq!(
            input.start_time,
            NaiveDate::from_ymd_opt(2035, 4, 1)
                .unwrap()
                .and_hms_opt(20, 0, 0)
                .unwrap()
        );
    }

    #[test]
    fn rejects_bad_ids_and_time() {
        let form = FormData::parse(b"artist_id=abc&venue_id=-3&start_time=soon");
        let errors = validate(&form).unwrap_err();
        assert!(errors.has("artist_id"));
        assert!(errors.has("venue_id"));
        assert!(errors.has("start_time"));
    }

    #[test]
    fn missing_fields_are_required() {
        let errors = validate(&FormData::default()).unwrap_err();
        assert_eq!(errors.errors().len(), 3);
    }
}
