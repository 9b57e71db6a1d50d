//! Expands route timetables into bus state records.
//!
//! Each stop on each route yields one `BusState`: the route's bus as it
//! would look standing at that stop. Everything except occupancy and the
//! timestamp follows from the timetable alone.

use chrono::Local;
use rand::Rng;
use tracing::debug;

use crate::domain::{BusState, BusStatus, DEFAULT_CAPACITY, RouteDefinition, format_display_timestamp};

/// Smallest generated occupancy (inclusive).
const MIN_OCCUPANCY: u32 = 5;

/// Largest generated occupancy (exclusive).
const MAX_OCCUPANCY: u32 = 40;

/// Generate one bus state per (route, stop), stamped with the current time.
pub fn generate_bus_states<R: Rng + ?Sized>(routes: &[RouteDefinition], rng: &mut R) -> Vec<BusState> {
    let now = format_display_timestamp(Local::now().naive_local());
    generate_bus_states_at(routes, rng, &now)
}

/// Generate one bus state per (route, stop) with a fixed `last_update`.
///
/// Output is grouped by route in input order, then by stop index.
pub fn generate_bus_states_at<R: Rng + ?Sized>(
    routes: &[RouteDefinition],
    rng: &mut R,
    last_update: &str,
) -> Vec<BusState> {
    let mut buses = Vec::with_capacity(routes.iter().map(|r| r.stops().len()).sum());

    for route in routes {
        let final_stop = route.final_stop();
        let stops = route.stops();

        for (i, stop) in stops.iter().enumerate() {
            let next_stop = stops.get(i + 1).unwrap_or(final_stop);

            buses.push(BusState {
                id: Some(format!("{}-{}", route.number(), i + 1)),
                number: route.number().to_string(),
                route: route.number().to_string(),
                current_stop: stop.pickup.clone(),
                next_stop: next_stop.pickup.clone(),
                eta_minutes: stop.time.minutes_until(final_stop.time),
                status: BusStatus::OnTime,
                delay: 0,
                occupancy: rng.random_range(MIN_OCCUPANCY..MAX_OCCUPANCY),
                capacity: DEFAULT_CAPACITY,
                driver: format!("Driver for {}", route.number()),
                driver_phone: String::new(),
                last_update: last_update.to_string(),
            });
        }
    }

    debug!(routes = routes.len(), buses = buses.len(), "generated bus states");
    buses
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RouteCatalog;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sample_routes() -> Vec<RouteDefinition> {
        vec![
            RouteDefinition::from_timetable(
                "VV-1",
                &[
                    ("Kankipadu", "7:25 AM"),
                    ("Gosala", "7:30 AM"),
                    ("VIT -AP Campus", "8:45 AM"),
                ],
            )
            .unwrap(),
            RouteDefinition::from_timetable("VV-9", &[("Campus", "8:45 AM")]).unwrap(),
        ]
    }

    #[test]
    fn one_record_per_stop_in_order() {
        let mut rng = StdRng::seed_from_u64(1);
        let buses = generate_bus_states_at(&sample_routes(), &mut rng, "now");

        let ids: Vec<_> = buses.iter().map(|b| b.id.as_deref().unwrap()).collect();
        assert_eq!(ids, ["VV-1-1", "VV-1-2", "VV-1-3", "VV-9-1"]);
    }

    #[test]
    fn fields_follow_timetable() {
        let mut rng = StdRng::seed_from_u64(1);
        let buses = generate_bus_states_at(&sample_routes(), &mut rng, "1/1/2024, 7:00:00 AM");

        let first = &buses[0];
        assert_eq!(first.number, "VV-1");
        assert_eq!(first.route, "VV-1");
        assert_eq!(first.current_stop, "Kankipadu");
        assert_eq!(first.next_stop, "Gosala");
        assert_eq!(first.eta_minutes, 80);
        assert_eq!(first.status, BusStatus::OnTime);
        assert_eq!(first.delay, 0);
        assert_eq!(first.capacity, 40);
        assert_eq!(first.driver, "Driver for VV-1");
        assert_eq!(first.last_update, "1/1/2024, 7:00:00 AM");

        assert_eq!(buses[1].eta_minutes, 75);
    }

    #[test]
    fn final_stop_points_at_itself() {
        let mut rng = StdRng::seed_from_u64(1);
        let buses = generate_bus_states_at(&sample_routes(), &mut rng, "now");

        let last = &buses[2];
        assert_eq!(last.current_stop, "VIT -AP Campus");
        assert_eq!(last.next_stop, "VIT -AP Campus");
        assert_eq!(last.eta_minutes, 0);

        let single = &buses[3];
        assert_eq!(single.current_stop, single.next_stop);
        assert_eq!(single.eta_minutes, 0);
    }

    #[test]
    fn numbers_are_shared_within_a_route() {
        let mut rng = StdRng::seed_from_u64(1);
        let buses = generate_bus_states_at(&sample_routes(), &mut rng, "now");
        assert_eq!(buses.iter().filter(|b| b.number == "VV-1").count(), 3);
    }

    #[test]
    fn catalog_invariants() {
        let catalog = RouteCatalog::load().unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let buses = generate_bus_states(catalog.routes(), &mut rng);

        let mut offset = 0;
        for route in catalog.routes() {
            let n = route.stops().len();
            let records = &buses[offset..offset + n];
            assert!(records.iter().all(|b| b.route == route.number()));

            let last = records.last().unwrap();
            assert_eq!(last.current_stop, route.final_stop().pickup);
            assert_eq!(last.next_stop, route.final_stop().pickup);
            assert_eq!(last.eta_minutes, 0);
            offset += n;
        }
        assert_eq!(offset, buses.len());
    }

    #[test]
    fn occupancy_in_range() {
        let catalog = RouteCatalog::load().unwrap();
        let mut rng = StdRng::seed_from_u64(99);
        for bus in generate_bus_states(catalog.routes(), &mut rng) {
            assert!((5..40).contains(&bus.occupancy));
            assert!(bus.occupancy <= bus.capacity);
        }
    }

    #[test]
    fn regeneration_is_deterministic() {
        let catalog = RouteCatalog::load().unwrap();
        let key = |b: &BusState| {
            (
                b.id.clone(),
                b.number.clone(),
                b.current_stop.clone(),
                b.next_stop.clone(),
                b.eta_minutes,
            )
        };

        let a = generate_bus_states(catalog.routes(), &mut StdRng::seed_from_u64(3));
        let b = generate_bus_states(catalog.routes(), &mut StdRng::seed_from_u64(3));
        assert_eq!(a.iter().map(key).collect::<Vec<_>>(), b.iter().map(key).collect::<Vec<_>>());

        let occ = |v: &[BusState]| v.iter().map(|b| b.occupancy).collect::<Vec<_>>();
        assert_eq!(occ(&a), occ(&b));
    }
}
