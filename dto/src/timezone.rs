/// Timezones offered in a slot row, in display order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Timezone {
    #[default]
    India,
    UsEast,
    UsWest,
    Uk,
    France,
    Japan,
    Australia,
}

impl Timezone {
    pub const ALL: [Timezone; 7] = [
        Timezone::India,
        Timezone::UsEast,
        Timezone::UsWest,
        Timezone::Uk,
        Timezone::France,
        Timezone::Japan,
        Timezone::Australia,
    ];

    /// IANA identifier, used as the option value.
    pub fn identifier(&self) -> &'static str {
        match self {
            Timezone::India => "Asia/Kolkata",
            Timezone::UsEast => "America/New_York",
            Timezone::UsWest => "America/Los_Angeles",
            Timezone::Uk => "Europe/London",
            Timezone::France => "Europe/Paris",
            Timezone::Japan => "Asia/Tokyo",
            Timezone::Australia => "Australia/Sydney",
        }
    }

    fn region(&self) -> &'static str {
        match self {
            Timezone::India => "India",
            Timezone::UsEast => "US East",
            Timezone::UsWest => "US West",
            Timezone::Uk => "UK",
            Timezone::France => "France",
            Timezone::Japan => "Japan",
            Timezone::Australia => "Australia",
        }
    }

    pub fn label(&self) -> String {
        format!("{} ({})", self.region(), self.identifier())
    }
}
