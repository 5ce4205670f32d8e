//! Named getters over well-known Ipregistry response fields.
//!
//! Every getter is one row of the table below: a name, a value kind, and the
//! dotted path it reads. The kind fixes what an absent field turns into:
//! `None` for scalars, `false` for flags, an empty `Vec` for collections.
//! Field reference: <https://ipregistry.co/docs/fields>

use super::ApiResponse;
use serde_json::Value;

/// Value kind of a named field, which also fixes its default when absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Str,
    Int,
    Float,
    Bool,
    List,
}

/// One row of the getter table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub path: &'static str,
    pub kind: FieldKind,
}

/// A field read through its [`FieldSpec`], with the kind's default policy applied.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Str(Option<String>),
    Int(Option<i64>),
    Float(Option<f64>),
    Bool(bool),
    List(Vec<Value>),
}

impl FieldValue {
    /// True when the value is what an absent field produces.
    pub fn is_default(&self) -> bool {
        match self {
            FieldValue::Str(v) => v.is_none(),
            FieldValue::Int(v) => v.is_none(),
            FieldValue::Float(v) => v.is_none(),
            FieldValue::Bool(v) => !v,
            FieldValue::List(v) => v.is_empty(),
        }
    }
}

impl ApiResponse {
    /// Reads a field described by a table row.
    pub fn field_value(&self, spec: &FieldSpec) -> FieldValue {
        match spec.kind {
            FieldKind::Str => FieldValue::Str(self.get_str(spec.path)),
            FieldKind::Int => FieldValue::Int(self.get_i64(spec.path)),
            FieldKind::Float => FieldValue::Float(self.get_f64(spec.path)),
            FieldKind::Bool => FieldValue::Bool(self.get_bool(spec.path)),
            FieldKind::List => FieldValue::List(self.get_list(spec.path)),
        }
    }
}

macro_rules! response_fields {
    (@ret Str) => { Option<String> };
    (@ret Int) => { Option<i64> };
    (@ret Float) => { Option<f64> };
    (@ret Bool) => { bool };
    (@ret List) => { Vec<Value> };

    (@read Str) => { ApiResponse::get_str };
    (@read Int) => { ApiResponse::get_i64 };
    (@read Float) => { ApiResponse::get_f64 };
    (@read Bool) => { ApiResponse::get_bool };
    (@read List) => { ApiResponse::get_list };

    ($( $(#[$meta:meta])* $name:ident: $kind:ident = $path:literal; )*) => {
        /// Every named getter of [`ApiResponse`], in declaration order.
        pub static FIELDS: &[FieldSpec] = &[
            $( FieldSpec { name: stringify!($name), path: $path, kind: FieldKind::$kind }, )*
        ];

        impl ApiResponse {
            $(
                $(#[$meta])*
                pub fn $name(&self) -> response_fields!(@ret $kind) {
                    (response_fields!(@read $kind))(self, $path)
                }
            )*
        }
    };
}

response_fields! {
    // IP address, carrier, company and connection
    /// The IP address the response describes.
    ip: Str = "ip";
    /// `"IPv4"` or `"IPv6"`.
    ip_type: Str = "type";
    /// Reverse DNS name; only present when hostname lookup is enabled.
    hostname: Str = "hostname";
    carrier_name: Str = "carrier.name";
    /// Mobile Country Code.
    carrier_mcc: Str = "carrier.mcc";
    /// Mobile Network Code.
    carrier_mnc: Str = "carrier.mnc";
    company_domain: Str = "company.domain";
    company_name: Str = "company.name";
    company_type: Str = "company.type";
    connection_asn: Int = "connection.asn";
    connection_domain: Str = "connection.domain";
    connection_organization: Str = "connection.organization";
    connection_route: Str = "connection.route";
    connection_type: Str = "connection.type";

    // Currency
    /// ISO 4217 code.
    currency_code: Str = "currency.code";
    currency_name: Str = "currency.name";
    currency_name_native: Str = "currency.name_native";
    currency_plural: Str = "currency.plural";
    currency_plural_native: Str = "currency.plural_native";
    currency_symbol: Str = "currency.symbol";
    currency_symbol_native: Str = "currency.symbol_native";
    currency_negative_prefix: Str = "currency.format.negative.prefix";
    currency_negative_suffix: Str = "currency.format.negative.suffix";
    currency_positive_prefix: Str = "currency.format.positive.prefix";
    currency_positive_suffix: Str = "currency.format.positive.suffix";

    // Location
    continent_code: Str = "location.continent.code";
    continent_name: Str = "location.continent.name";
    /// Country area in square kilometers.
    country_area: Float = "location.country.area";
    /// ISO 3166-1 alpha-2 codes of neighbouring countries.
    country_borders: List = "location.country.borders";
    country_calling_code: Str = "location.country.calling_code";
    country_capital: Str = "location.country.capital";
    /// ISO 3166-1 alpha-2 code.
    country_code: Str = "location.country.code";
    country_name: Str = "location.country.name";
    country_population: Int = "location.country.population";
    country_population_density: Float = "location.country.population_density";
    country_flag_emoji: Str = "location.country.flag.emoji";
    country_flag_emoji_unicode: Str = "location.country.flag.emoji_unicode";
    country_flag_emojitwo: Str = "location.country.flag.emojitwo";
    country_flag_noto: Str = "location.country.flag.noto";
    country_flag_twemoji: Str = "location.country.flag.twemoji";
    country_flag_wikimedia: Str = "location.country.flag.wikimedia";
    country_languages: List = "location.country.languages";
    country_tld: Str = "location.country.tld";
    region_code: Str = "location.region.code";
    region_name: Str = "location.region.name";
    city: Str = "location.city";
    postal_code: Str = "location.postal";
    latitude: Float = "location.latitude";
    longitude: Float = "location.longitude";
    location_language_code: Str = "location.language.code";
    location_language_name: Str = "location.language.name";
    location_language_native: Str = "location.language.native";
    is_in_eu: Bool = "location.in_eu";

    // Security
    is_anonymous: Bool = "security.is_anonymous";
    is_abuser: Bool = "security.is_abuser";
    is_attacker: Bool = "security.is_attacker";
    /// Unallocated or reserved address space.
    is_bogon: Bool = "security.is_bogon";
    is_cloud_provider: Bool = "security.is_cloud_provider";
    is_proxy: Bool = "security.is_proxy";
    is_relay: Bool = "security.is_relay";
    /// Set when any of the other threat flags is.
    is_threat: Bool = "security.is_threat";
    is_tor: Bool = "security.is_tor";
    is_tor_exit: Bool = "security.is_tor_exit";
    is_vpn: Bool = "security.is_vpn";

    // Time zone
    /// IANA identifier, e.g. `"America/Los_Angeles"`.
    time_zone_id: Str = "time_zone.id";
    time_zone_abbreviation: Str = "time_zone.abbreviation";
    /// ISO 8601 local time at the moment of the lookup.
    time_zone_current_time: Str = "time_zone.current_time";
    time_zone_name: Str = "time_zone.name";
    /// Offset from UTC in seconds.
    time_zone_offset: Int = "time_zone.offset";
    is_time_zone_in_daylight_saving: Bool = "time_zone.in_daylight_saving";

    // User-Agent
    /// The raw header that was parsed.
    user_agent_header: Str = "user_agent.header";
    user_agent_name: Str = "user_agent.name";
    user_agent_type: Str = "user_agent.type";
    user_agent_version: Str = "user_agent.version";
    user_agent_version_major: Str = "user_agent.version_major";
    device_brand: Str = "user_agent.device.brand";
    device_name: Str = "user_agent.device.name";
    device_type: Str = "user_agent.device.type";
    engine_name: Str = "user_agent.engine.name";
    engine_type: Str = "user_agent.engine.type";
    engine_version: Str = "user_agent.engine.version";
    os_name: Str = "user_agent.os.name";
    os_type: Str = "user_agent.os.type";
    os_version: Str = "user_agent.os.version";

    // Autonomous system (top-level fields of an ASN lookup)
    asn_allocated: Str = "allocated";
    asn: Int = "asn";
    asn_country_code: Str = "country_code";
    asn_domain: Str = "domain";
    asn_name: Str = "name";
    asn_ipv4_prefixes: List = "prefixes.ipv4";
    asn_ipv6_prefixes: List = "prefixes.ipv6";
    asn_ipv4_count: Int = "prefixes.ipv4_count";
    asn_ipv6_count: Int = "prefixes.ipv6_count";
    asn_downstreams: List = "relationships.downstreams";
    asn_peers: List = "relationships.peers";
    asn_upstreams: List = "relationships.upstreams";
    /// Regional Internet Registry, e.g. `"ARIN"`.
    asn_registry: Str = "registry";
    asn_type: Str = "type";
    asn_updated: Str = "updated";
}
