mod geo;

pub use geo::{is_data_field, Currency, GeolocationData, Timezone, FIELD_NAMES};
