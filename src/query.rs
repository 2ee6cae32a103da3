use crate::geo::Sphere;
use crate::venue::Venue;
use ordered_float::OrderedFloat;

/// Venue with the most seats. Ties go to the first one in the list.
pub fn largest(venues: &[Venue]) -> Option<&Venue> {
    // Iterator::max_by_key keeps the last maximum, so fold by hand.
    venues
        .iter()
        .reduce(|best, venue| if venue.seats > best.seats { venue } else { best })
}

/// Venue with the fewest seats. Ties go to the first one in the list.
pub fn smallest(venues: &[Venue]) -> Option<&Venue> {
    venues.iter().min_by_key(|venue| venue.seats)
}

#[derive(Debug, PartialEq)]
pub struct Nearest<'a> {
    pub venue: &'a Venue,
    pub distance_meters: f64,
}

/// Venue closest to the given point on `sphere`. Ties go to the first one in the list.
pub fn nearest_on<'a>(
    sphere: &Sphere,
    venues: &'a [Venue],
    latitude: f64,
    longitude: f64,
) -> Option<Nearest<'a>> {
    venues
        .iter()
        .map(|venue| Nearest {
            venue,
            distance_meters: sphere.distance_meters(
                venue.latitude,
                venue.longitude,
                latitude,
                longitude,
            ),
        })
        .min_by_key(|candidate| OrderedFloat(candidate.distance_meters))
}

/// Venue closest to the given point on Earth.
pub fn nearest(venues: &[Venue], latitude: f64, longitude: f64) -> Option<&Venue> {
    nearest_on(&Sphere::EARTH, venues, latitude, longitude).map(|found| found.venue)
}
