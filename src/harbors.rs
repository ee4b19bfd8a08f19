//! Named harbors usable as route endpoints

use serde::Serialize;

use crate::geo::Coordinates;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Harbor {
    pub id: &'static str,
    pub name: &'static str,
    pub coordinates: Coordinates,
}

pub static HARBORS: [Harbor; 5] = [
    Harbor {
        id: "nagapattinam_port",
        name: "Nagapattinam Port",
        coordinates: Coordinates::new(10.7654, 79.8421),
    },
    Harbor {
        id: "rameswaram_port",
        name: "Rameswaram Harbor",
        coordinates: Coordinates::new(9.2882, 79.3129),
    },
    Harbor {
        id: "cuddalore_port",
        name: "Cuddalore Port",
        coordinates: Coordinates::new(11.748, 79.7714),
    },
    Harbor {
        id: "tuticorin_port",
        name: "Tuticorin Harbor",
        coordinates: Coordinates::new(8.7642, 78.1348),
    },
    Harbor {
        id: "chennai_port",
        name: "Chennai Harbor",
        coordinates: Coordinates::new(13.0827, 80.2707),
    },
];

/// Look up a harbor by id
pub fn find_harbor(id: &str) -> Option<&'static Harbor> {
    HARBORS.iter().find(|harbor| harbor.id == id)
}
