//! Fixed stop registry and driver roster.

/// Stop name → bus numbers calling there, in registry order.
const STOP_REGISTRY: &[(&str, &[&str])] = &[
    ("Main Gate", &["VIT-101", "VIT-202", "VIT-303"]),
    ("Library", &["VIT-303", "VIT-404"]),
    ("Hostel Block A", &["VIT-101", "VIT-202"]),
    ("Academic Block", &["VIT-303", "VIT-404"]),
    ("Katpadi Junction", &["VIT-101", "VIT-202"]),
    ("Gandhi Nagar", &["VIT-101"]),
    ("Arcot Road", &["VIT-202", "VIT-303"]),
    ("Hosur", &["VIT-404"]),
    ("Electronics City", &["VIT-404"]),
];

/// The fixed stop registry used for "search by stop".
pub fn stop_registry() -> &'static [(&'static str, &'static [&'static str])] {
    STOP_REGISTRY
}

/// A driver and the bus they are assigned to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverRecord {
    pub name: &'static str,
    pub license: &'static str,
    pub phone: &'static str,
    pub assigned_bus: &'static str,
    pub on_duty: bool,
    pub experience_years: u32,
}

const DRIVERS: &[DriverRecord] = &[
    DriverRecord {
        name: "Rajesh Kumar",
        license: "TN-07-2019-1234567",
        phone: "+91 9876543210",
        assigned_bus: "VIT-101",
        on_duty: true,
        experience_years: 8,
    },
    DriverRecord {
        name: "Suresh Babu",
        license: "TN-07-2018-7654321",
        phone: "+91 9876543211",
        assigned_bus: "VIT-202",
        on_duty: true,
        experience_years: 12,
    },
    DriverRecord {
        name: "Murugan S",
        license: "TN-07-2020-9876543",
        phone: "+91 9876543212",
        assigned_bus: "VIT-303",
        on_duty: false,
        experience_years: 5,
    },
    DriverRecord {
        name: "Kumar R",
        license: "KA-03-2017-5432109",
        phone: "+91 9876543213",
        assigned_bus: "VIT-404",
        on_duty: true,
        experience_years: 15,
    },
];

/// All known drivers.
pub fn driver_roster() -> &'static [DriverRecord] {
    DRIVERS
}

/// The driver assigned to a bus, if any.
pub fn driver_for_bus(bus_number: &str) -> Option<&'static DriverRecord> {
    DRIVERS.iter().find(|d| d.assigned_bus == bus_number)
}
