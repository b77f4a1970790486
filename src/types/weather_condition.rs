//! Defines the `ConditionCode` enum, mapping WeatherKit's textual condition codes
//! to their display labels.

/// Represents a condition code reported by WeatherKit.
///
/// WeatherKit describes the sky and weather state with a fixed vocabulary of
/// camel-case codes (e.g. `PartlyCloudy`) found in the `conditionCode` field of
/// current, hourly, daily and day-part records.
///
/// You can convert a code string into this enum using [`ConditionCode::from_code`],
/// and get a human readable label with [`ConditionCode::label`].
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum ConditionCode {
    Clear,
    Cloudy,
    Dust,
    Fog,
    Haze,
    MostlyClear,
    MostlyCloudy,
    PartlyCloudy,
    ScatteredThunderstorms,
    Smoke,
    Breezy,
    Windy,
    Drizzle,
    HeavyRain,
    Rain,
    Showers,
    Flurries,
    HeavySnow,
    MixedRainAndSleet,
    MixedRainAndSnow,
    MixedRainfall,
    MixedSnowAndSleet,
    ScatteredShowers,
    ScatteredSnowShowers,
    Sleet,
    Snow,
    SnowShowers,
    Blizzard,
    BlowingSnow,
    FreezingDrizzle,
    FreezingRain,
    Frigid,
    Hail,
    Hot,
    Hurricane,
    IsolatedThunderstorms,
    SevereThunderstorm,
    Thunderstorm,
    Tornado,
    TropicalStorm,
}

impl ConditionCode {
    const ALL: [ConditionCode; 40] = [
        ConditionCode::Clear,
        ConditionCode::Cloudy,
        ConditionCode::Dust,
        ConditionCode::Fog,
        ConditionCode::Haze,
        ConditionCode::MostlyClear,
        ConditionCode::MostlyCloudy,
        ConditionCode::PartlyCloudy,
        ConditionCode::ScatteredThunderstorms,
        ConditionCode::Smoke,
        ConditionCode::Breezy,
        ConditionCode::Windy,
        ConditionCode::Drizzle,
        ConditionCode::HeavyRain,
        ConditionCode::Rain,
        ConditionCode::Showers,
        ConditionCode::Flurries,
        ConditionCode::HeavySnow,
        ConditionCode::MixedRainAndSleet,
        ConditionCode::MixedRainAndSnow,
        ConditionCode::MixedRainfall,
        ConditionCode::MixedSnowAndSleet,
        ConditionCode::ScatteredShowers,
        ConditionCode::ScatteredSnowShowers,
        ConditionCode::Sleet,
        ConditionCode::Snow,
        ConditionCode::SnowShowers,
        ConditionCode::Blizzard,
        ConditionCode::BlowingSnow,
        ConditionCode::FreezingDrizzle,
        ConditionCode::FreezingRain,
        ConditionCode::Frigid,
        ConditionCode::Hail,
        ConditionCode::Hot,
        ConditionCode::Hurricane,
        ConditionCode::IsolatedThunderstorms,
        ConditionCode::SevereThunderstorm,
        ConditionCode::Thunderstorm,
        ConditionCode::Tornado,
        ConditionCode::TropicalStorm,
    ];

    /// All known condition codes.
    pub fn all() -> &'static [ConditionCode] {
        &Self::ALL
    }

    /// Attempts to convert a WeatherKit condition code string into a `ConditionCode`.
    ///
    /// Matching is exact and case-sensitive, as WeatherKit always sends the
    /// camel-case form.
    ///
    /// # Returns
    ///
    /// * `Some(ConditionCode)` if `code` is one of the known codes.
    /// * `None` otherwise (including the empty string).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use weatherkit::ConditionCode;
    ///
    /// assert_eq!(ConditionCode::from_code("HeavyRain"), Some(ConditionCode::HeavyRain));
    /// assert_eq!(ConditionCode::from_code("heavyrain"), None);
    /// assert_eq!(ConditionCode::from_code("clear"), None);
    /// ```
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.code() == code)
    }

    /// The code as sent by WeatherKit.
    pub fn code(&self) -> &'static str {
        match self {
            ConditionCode::Clear => "Clear",
            ConditionCode::Cloudy => "Cloudy",
            ConditionCode::Dust => "Dust",
            ConditionCode::Fog => "Fog",
            ConditionCode::Haze => "Haze",
            ConditionCode::MostlyClear => "MostlyClear",
            ConditionCode::MostlyCloudy => "MostlyCloudy",
            ConditionCode::PartlyCloudy => "PartlyCloudy",
            ConditionCode::ScatteredThunderstorms => "ScatteredThunderstorms",
            ConditionCode::Smoke => "Smoke",
            ConditionCode::Breezy => "Breezy",
            ConditionCode::Windy => "Windy",
            ConditionCode::Drizzle => "Drizzle",
            ConditionCode::HeavyRain => "HeavyRain",
            ConditionCode::Rain => "Rain",
            ConditionCode::Showers => "Showers",
            ConditionCode::Flurries => "Flurries",
            ConditionCode::HeavySnow => "HeavySnow",
            ConditionCode::MixedRainAndSleet => "MixedRainAndSleet",
            ConditionCode::MixedRainAndSnow => "MixedRainAndSnow",
            ConditionCode::MixedRainfall => "MixedRainfall",
            ConditionCode::MixedSnowAndSleet => "MixedSnowAndSleet",
            ConditionCode::ScatteredShowers => "ScatteredShowers",
            ConditionCode::ScatteredSnowShowers => "ScatteredSnowShowers",
            ConditionCode::Sleet => "Sleet",
            ConditionCode::Snow => "Snow",
            ConditionCode::SnowShowers => "SnowShowers",
            ConditionCode::Blizzard => "Blizzard",
            ConditionCode::BlowingSnow => "BlowingSnow",
            ConditionCode::FreezingDrizzle => "FreezingDrizzle",
            ConditionCode::FreezingRain => "FreezingRain",
            ConditionCode::Frigid => "Frigid",
            ConditionCode::Hail => "Hail",
            ConditionCode::Hot => "Hot",
            ConditionCode::Hurricane => "Hurricane",
            ConditionCode::IsolatedThunderstorms => "IsolatedThunderstorms",
            ConditionCode::SevereThunderstorm => "SevereThunderstorm",
            ConditionCode::Thunderstorm => "Thunderstorm",
            ConditionCode::Tornado => "Tornado",
            ConditionCode::TropicalStorm => "TropicalStorm",
        }
    }

    /// The display label for this condition, e.g. `"Mixed Rain and Sleet"`.
    pub fn label(&self) -> &'static str {
        match self {
            ConditionCode::Clear => "Clear",
            ConditionCode::Cloudy => "Cloudy",
            ConditionCode::Dust => "Dust",
            ConditionCode::Fog => "Fog",
            ConditionCode::Haze => "Haze",
            ConditionCode::MostlyClear => "Mostly Clear",
            ConditionCode::MostlyCloudy => "Mostly Cloudy",
            ConditionCode::PartlyCloudy => "Partly Cloudy",
            ConditionCode::ScatteredThunderstorms => "Scattered Thunderstorms",
            ConditionCode::Smoke => "Smoke",
            ConditionCode::Breezy => "Breezy",
            ConditionCode::Windy => "Windy",
            ConditionCode::Drizzle => "Drizzle",
            ConditionCode::HeavyRain => "Heavy Rain",
            ConditionCode::Rain => "Rain",
            ConditionCode::Showers => "Showers",
            ConditionCode::Flurries => "Flurries",
            ConditionCode::HeavySnow => "Heavy Snow",
            ConditionCode::MixedRainAndSleet => "Mixed Rain and Sleet",
            ConditionCode::MixedRainAndSnow => "Mixed Rain and Snow",
            ConditionCode::MixedRainfall => "Mixed Rainfall",
            ConditionCode::MixedSnowAndSleet => "Mixed Snow and Sleet",
            ConditionCode::ScatteredShowers => "Scattered Showers",
            ConditionCode::ScatteredSnowShowers => "Scattered Snow Showers",
            ConditionCode::Sleet => "Sleet",
            ConditionCode::Snow => "Snow",
            ConditionCode::SnowShowers => "Snow Showers",
            ConditionCode::Blizzard => "Blizzard",
            ConditionCode::BlowingSnow => "Blowing Snow",
            ConditionCode::FreezingDrizzle => "Freezing Drizzle",
            ConditionCode::FreezingRain => "Freezing Rain",
            ConditionCode::Frigid => "Frigid",
            ConditionCode::Hail => "Hail",
            ConditionCode::Hot => "Hot",
            ConditionCode::Hurricane => "Hurricane",
            ConditionCode::IsolatedThunderstorms => "Isolated Thunderstorms",
            ConditionCode::SevereThunderstorm => "Severe Thunderstorm",
            ConditionCode::Thunderstorm => "Thunderstorm",
            ConditionCode::Tornado => "Tornado",
            ConditionCode::TropicalStorm => "Tropical Storm",
        }
    }
}
