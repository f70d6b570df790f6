use super::{
    FormData, ValidationErrors, genre_choices, link, max_length, phone, required, state_choice,
};
use crate::models::artist::ArtistInput;

/// Validates an artist create/edit submission, overwrite-all like venues.
pub fn validate(form: &FormData) -> Result<ArtistInput, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let name = required(&mut errors, form, "name");
    let city = required(&mut errors, form, "city");
    let state = required(&mut errors, form, "state");
    let genres = form.values("genres");

    let phone_number = form.text("phone");
    let image_link = form.text("image_link");
    let website_link = form.text("website_link");
    let facebook_link = form.text("facebook_link");
    let seeking_description = form.text("seeking_description");

    max_length(&mut errors, "city", Some(city.as_str()), 120);
    state_choice(&mut errors, "state", &state);
    genre_choices(&mut errors, "genres", &genres);
    phone(&mut errors, "phone", phone_number.as_deref());
    link(&mut errors, "image_link", image_link.as_deref());
    link(&mut errors, "website_link", website_link.as_deref());
    link(&mut errors, "facebook_link", facebook_link.as_deref());
    max_length(&mut errors, "seeking_description", seeking_description.as_deref(), 500);

    // Older templates posted the artist flag under the venue's field name.
    let seeking_venue = form.checkbox("seeking_venue") || form.checkbox("seeking_talent");

    errors.finish(ArtistInput {
        name,
        city: Some(city),
        state: Some(state),
        phone: phone_number,
        genres,
        image_link,
        website_link,
        facebook_link,
        seeking_venue,
        seeking_description,
    })
}
