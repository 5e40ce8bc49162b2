use serde::Serialize;

pub const ONLINE: &str = "Online";

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Online events are pinned to Brasília
const ONLINE_COORDINATES: Coordinates = Coordinates::new(-15.7975, -47.8919);

static BRAZILIAN_CITIES: [(&str, Coordinates); 24] = [
    ("São Paulo", Coordinates::new(-23.5505, -46.6333)),
    ("Rio de Janeiro", Coordinates::new(-22.9068, -43.1729)),
    ("Belo Horizonte", Coordinates::new(-19.9191, -43.9387)),
    ("Porto Alegre", Coordinates::new(-30.0346, -51.2177)),
    ("Florianópolis", Coordinates::new(-27.5954, -48.5480)),
    ("Curitiba", Coordinates::new(-25.4284, -49.2733)),
    ("Brasília", Coordinates::new(-15.7975, -47.8919)),
    ("Salvador", Coordinates::new(-12.9714, -38.5014)),
    ("Fortaleza", Coordinates::new(-3.7327, -38.5270)),
    ("Recife", Coordinates::new(-8.0476, -34.8770)),
    ("Campinas", Coordinates::new(-22.9099, -47.0626)),
    ("São José dos Campos", Coordinates::new(-23.2237, -45.9009)),
    ("Blumenau", Coordinates::new(-26.9194, -49.0661)),
    ("Passo Fundo", Coordinates::new(-28.2628, -52.4083)),
    ("Encantado", Coordinates::new(-29.2362, -51.8696)),
    ("Caxias do Sul", Coordinates::new(-29.1681, -51.1794)),
    ("São Leopoldo", Coordinates::new(-29.7604, -51.1474)),
    ("São José do Rio Preto", Coordinates::new(-20.8198, -49.3766)),
    ("Manaus", Coordinates::new(-3.1190, -60.0217)),
    ("Goiânia", Coordinates::new(-16.6869, -49.2648)),
    ("Vitória", Coordinates::new(-20.2976, -40.2958)),
    ("Campo Grande", Coordinates::new(-20.4697, -54.6201)),
    ("Natal", Coordinates::new(-5.7945, -35.2110)),
    (ONLINE, ONLINE_COORDINATES),
];

/// Closed city name to coordinates lookup. Unknown cities resolve to the
/// online placeholder, so every event ends up with a position.
#[derive(Debug, Clone, Copy)]
pub struct CoordinateTable {
    cities: &'static [(&'static str, Coordinates)],
    online: Coordinates,
}

impl Default for CoordinateTable {
    fn default() -> Self {
        Self::new(&BRAZILIAN_CITIES, ONLINE_COORDINATES)
    }
}

impl CoordinateTable {
    pub const fn new(cities: &'static [(&'static str, Coordinates)], online: Coordinates) -> Self {
        Self { cities, online }
    }

    pub fn online(&self) -> Coordinates {
        self.online
    }

    pub fn get(&self, city: &str) -> Option<Coordinates> {
        self.cities
            .iter()
            .find(|(name, _)| *name == city)
            .map(|(_, coordinates)| *coordinates)
    }

    pub fn resolve(&self, city: &str) -> Coordinates {
        self.get(city).unwrap_or(self.online)
    }
}
