use super::{
    FormData, ValidationErrors, genre_choices, link, max_length, phone, required, state_choice,
};
use crate::models::venue::VenueInput;

/// Validates a venue create/edit submission.
///
/// Every field of the returned input is taken from the form: blank optional
/// fields become `None` and an unchecked `seeking_talent` box becomes `false`.
pub fn validate(form: &FormData) -> Result<VenueInput, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let name = required(&mut errors, form, "name");
    let city = required(&mut errors, form, "city");
    let state = required(&mut errors, form, "state");
    let address = required(&mut errors, form, "address");
    let genres = form.values("genres");

    let phone_number = form.text("phone");
    let image_link = form.text("image_link");
    let website_link = form.text("website_link");
    let facebook_link = form.text("facebook_link");
    let seeking_description = form.text("seeking_description");

    max_length(&mut errors, "city", Some(city.as_str()), 120);
    max_length(&mut errors, "address", Some(address.as_str()), 120);
    state_choice(&mut errors, "state", &state);
    genre_choices(&mut errors, "genres", &genres);
    phone(&mut errors, "phone", phone_number.as_deref());
    link(&mut errors, "image_link", image_link.as_deref());
    link(&mut errors, "website_link", website_link.as_deref());
    link(&mut errors, "facebook_link", facebook_link.as_deref());
    max_length(&mut errors, "seeking_description", seeking_description.as_deref(), 500);

    errors.finish(VenueInput {
        name,
        city: Some(city),
        state: Some(state),
        address: Some(address),
        phone: phone_number,
        image_link,
        website_link,
        facebook_link,
        genres,
        looking_for_talent: form.checkbox("seeking_talent"),
        seeking_description,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &[u8] = b"name=The+Musical+Hop&city=San+Francisco&state=CA\
        &address=1015+Folsom+Street&phone=123-123-1234&genres=Jazz&genres=Reggae\
        &facebook_link=https%3A%2F%2Fwww.facebook.com%2FTheMusicalHop\
        &seeking_talent=y&seeking_description=Looking+for+local+artists";

    #[test]
    fn accepts_complete_submission() {
        let input = validate(&FormData::parse(VALID)).unwrap();

        assert_eq!(input.name, "The Musical Hop");
        assert_eq!(input.state.as_deref(), Some("CA"));
        assert_eq!(input.genres, vec!["Jazz", "Reggae"]);
        assert_eq!(
            input.facebook_link.as_deref(),
            Some("https://www.facebook.com/TheMusicalHop")
        );
        assert!(input.looking_for_talent);
        assert_eq!(input.website_link, None);
    }

    #[test]
    fn reports_every_missing_required_field() {
        let errors = validate(&FormData::parse(b"phone=123-123-1234")).unwrap_err();

        for field in ["name", "city", "state", "address", "genres"] {
            assert!(errors.has(field), "expected an error for {field}");
        }
        assert!(!errors.has("phone"));
    }

    #[test]
    fn rejects_unknown_choices() {
        let body = b"name=Hop&city=SF&state=ZZ&address=Main&genres=Polka";
        let errors = validate(&FormData::parse(body)).unwrap_err();
        assert!(errors.has("state"));
        assert!(errors.has("genres"));
    }

    #[test]
    fn unchecked_box_and_blank_fields_clear() {
        let body = b"name=Hop&city=SF&state=CA&address=Main&genres=Jazz&phone=&image_link=";
        let input = validate(&FormData::parse(body)).unwrap();
        assert!(!input.looking_for_talent);
        assert_eq!(input.phone, None);
        assert_eq!(input.image_link, None);
        assert_eq!(input.seeking_description, None);
    }
}
