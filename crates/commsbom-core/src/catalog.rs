//! Built-in product catalog and cost rates.
//!
//! The catalog is closed: every product the designer can quote is a
//! [`ProductId`] variant. Prices and SKUs here are defaults; the pricing feed
//! may overwrite them through [`Catalog::patch`], which is the only mutation.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable short code of a catalog product, serialized as the code itself
/// (e.g. `"WBPX"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ProductId {
    #[serde(rename = "WBPX")]
    WirelessBeltpack,
    #[serde(rename = "WBPXHD")]
    WirelessBeltpackSport,
    #[serde(rename = "GBPX")]
    WiredBeltpack,
    #[serde(rename = "WSX")]
    WallStation,
    #[serde(rename = "MCX")]
    KeyPanelRack,
    #[serde(rename = "MCXD")]
    KeyPanelDesktop,
    #[serde(rename = "MCXEXT")]
    KeyPanelExtensionRack,
    #[serde(rename = "MCXDEXT")]
    KeyPanelExtensionDesktop,
    #[serde(rename = "BSRX")]
    DectAntenna,
    #[serde(rename = "DNTI")]
    DanteInterface,
    #[serde(rename = "Q4WI")]
    Quad4WireInterface,
    #[serde(rename = "BRIDC")]
    BridgeInterface,
    #[serde(rename = "RDX")]
    RadioInterface,
    #[serde(rename = "INTERFACEX")]
    AudioInterface,
    #[serde(rename = "SI2W")]
    TwoWireThrowDown,
    #[serde(rename = "SI4W")]
    FourWireThrowDown,
    #[serde(rename = "SW8")]
    Switch8,
    #[serde(rename = "SW5")]
    Switch5,
    #[serde(rename = "SW6")]
    Switch6,
    #[serde(rename = "WAA")]
    ActiveAntenna,
    #[serde(rename = "SW18")]
    Switch18,
    #[serde(rename = "SFOM")]
    FiberModule,
    #[serde(rename = "BC6")]
    BatteryCharger,
    #[serde(rename = "PSU1")]
    PowerSupply,
    #[serde(rename = "HSET2E")]
    HeadsetDual,
    #[serde(rename = "HSET1E")]
    HeadsetSingle,
    #[serde(rename = "HSETC1E")]
    ComfortHeadsetSingle,
    #[serde(rename = "HSETC2E")]
    ComfortHeadsetDual,
    #[serde(rename = "TELH")]
    Handset,
    #[serde(rename = "GMIC300")]
    Gooseneck300,
    #[serde(rename = "GMIC430")]
    Gooseneck430,
    #[serde(rename = "BCON")]
    Beacon,
    #[serde(rename = "NRGP")]
    SpareBattery,
    #[serde(rename = "HARN")]
    Harness,
    #[serde(rename = "RMKI")]
    RackMountKit,
    #[serde(rename = "HSETCUST")]
    CustomerHeadset,
}

impl ProductId {
    pub const ALL: [ProductId; 36] = [
        ProductId::WirelessBeltpack,
        ProductId::WirelessBeltpackSport,
        ProductId::WiredBeltpack,
        ProductId::WallStation,
        ProductId::KeyPanelRack,
        ProductId::KeyPanelDesktop,
        ProductId::KeyPanelExtensionRack,
        ProductId::KeyPanelExtensionDesktop,
        ProductId::DectAntenna,
        ProductId::DanteInterface,
        ProductId::Quad4WireInterface,
        ProductId::BridgeInterface,
        ProductId::RadioInterface,
        ProductId::AudioInterface,
        ProductId::TwoWireThrowDown,
        ProductId::FourWireThrowDown,
        ProductId::Switch8,
        ProductId::Switch5,
        ProductId::Switch6,
        ProductId::ActiveAntenna,
        ProductId::Switch18,
        ProductId::FiberModule,
        ProductId::BatteryCharger,
        ProductId::PowerSupply,
        ProductId::HeadsetDual,
        ProductId::HeadsetSingle,
        ProductId::ComfortHeadsetSingle,
        ProductId::ComfortHeadsetDual,
        ProductId::Handset,
        ProductId::Gooseneck300,
        ProductId::Gooseneck430,
        ProductId::Beacon,
        ProductId::SpareBattery,
        ProductId::Harness,
        ProductId::RackMountKit,
        ProductId::CustomerHeadset,
    ];

    /// The short product code used in pricing feeds and saved configurations.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            ProductId::WirelessBeltpack => "WBPX",
            ProductId::WirelessBeltpackSport => "WBPXHD",
            ProductId::WiredBeltpack => "GBPX",
            ProductId::WallStation => "WSX",
            ProductId::KeyPanelRack => "MCX",
            ProductId::KeyPanelDesktop => "MCXD",
            ProductId::KeyPanelExtensionRack => "MCXEXT",
            ProductId::KeyPanelExtensionDesktop => "MCXDEXT",
            ProductId::DectAntenna => "BSRX",
            ProductId::DanteInterface => "DNTI",
            ProductId::Quad4WireInterface => "Q4WI",
            ProductId::BridgeInterface => "BRIDC",
            ProductId::RadioInterface => "RDX",
            ProductId::AudioInterface => "INTERFACEX",
            ProductId::TwoWireThrowDown => "SI2W",
            ProductId::FourWireThrowDown => "SI4W",
            ProductId::Switch8 => "SW8",
            ProductId::Switch5 => "SW5",
            ProductId::Switch6 => "SW6",
            ProductId::ActiveAntenna => "WAA",
            ProductId::Switch18 => "SW18",
            ProductId::FiberModule => "SFOM",
            ProductId::BatteryCharger => "BC6",
            ProductId::PowerSupply => "PSU1",
            ProductId::HeadsetDual => "HSET2E",
            ProductId::HeadsetSingle => "HSET1E",
            ProductId::ComfortHeadsetSingle => "HSETC1E",
            ProductId::ComfortHeadsetDual => "HSETC2E",
            ProductId::Handset => "TELH",
            ProductId::Gooseneck300 => "GMIC300",
            ProductId::Gooseneck430 => "GMIC430",
            ProductId::Beacon => "BCON",
            ProductId::SpareBattery => "NRGP",
            ProductId::Harness => "HARN",
            ProductId::RackMountKit => "RMKI",
            ProductId::CustomerHeadset => "HSETCUST",
        }
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown product code '{0}'")]
pub struct UnknownProductCode(pub String);

impl FromStr for ProductId {
    type Err = UnknownProductCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProductId::ALL
            .into_iter()
            .find(|id| id.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownProductCode(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductGroup {
    CoreDevices,
    Interfaces,
    NetworkPower,
    Accessories,
    CustomerSupplied,
}

impl std::fmt::Display for ProductGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductGroup::CoreDevices => write!(f, "Core Communication Devices"),
            ProductGroup::Interfaces => write!(f, "Interfaces"),
            ProductGroup::NetworkPower => write!(f, "Network & Power Infrastructure"),
            ProductGroup::Accessories => write!(f, "Accessories"),
            ProductGroup::CustomerSupplied => write!(f, "Customer Supplied"),
        }
    }
}

/// A catalog entry. Reference data: only `price` and `sku` ever change, and
/// only through [`Catalog::patch`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub sku: String,
    pub role: String,
    pub group: ProductGroup,
    pub price: Decimal,
    pub is_poe: bool,
    pub is_switch: bool,
    pub is_wireless: bool,
    pub is_core_device: bool,
    pub is_headset: bool,
    /// PoE port count; only set for switches.
    pub ports: Option<u32>,
}

impl Product {
    fn new(
        group: ProductGroup,
        id: ProductId,
        name: &str,
        sku: &str,
        role: &str,
        price: Decimal,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            sku: sku.to_string(),
            role: role.to_string(),
            group,
            price,
            is_poe: false,
            is_switch: false,
            is_wireless: false,
            is_core_device: false,
            is_headset: false,
            ports: None,
        }
    }

    fn poe(mut self) -> Self {
        self.is_poe = true;
        self
    }

    fn core(mut self) -> Self {
        self.is_core_device = true;
        self
    }

    fn wireless(mut self) -> Self {
        self.is_wireless = true;
        self
    }

    fn headset(mut self) -> Self {
        self.is_headset = true;
        self
    }

    fn switch(mut self, ports: u32) -> Self {
        self.is_switch = true;
        self.ports = Some(ports);
        self
    }
}

/// The full product list in display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// The built-in catalog with default prices and SKUs.
    #[must_use]
    #[allow(clippy::too_many_lines)]
    #[rustfmt::skip]
    pub fn builtin() -> Self {
        use ProductGroup::{Accessories, CoreDevices, CustomerSupplied, Interfaces, NetworkPower};
        use ProductId as P;

        let products = vec![
            Product::new(CoreDevices, P::WirelessBeltpack, "Wireless Beltpack", "GGO-WBPX", "Primary DECT User Device", dec!(2093.00)).core().wireless(),
            Product::new(CoreDevices, P::WirelessBeltpackSport, "Wireless Beltpack (Sport)", "GGO-WBPX SPORT", "Rugged DECT User Device", dec!(2093.00)).core().wireless(),
            Product::new(CoreDevices, P::WiredBeltpack, "32 Channel Wired Beltpack", "GGO-GBPX", "Primary Wired User Device", dec!(1031.33)).poe().core(),
            Product::new(CoreDevices, P::WallStation, "Surface Mount Wall Station w/ Headset and Speaker", "GGO-WPX", "Permanent Wall-Mounted User Device", dec!(1183.00)).poe().core(),
            Product::new(CoreDevices, P::KeyPanelRack, "32 Channel Key Panel, 1U Rack Mount", "GGO-MCX", "32-Channel Rack Station", dec!(3159.00)).poe().core(),
            Product::new(CoreDevices, P::KeyPanelDesktop, "32 Channel Key Panel, Desktop", "GGO-MCXD", "32-Channel Desktop Station", dec!(3159.00)).poe().core(),
            Product::new(CoreDevices, P::KeyPanelExtensionRack, "24 Channel Key Panel Extension, 1U Rack Mount", "GGO-MCXEXT", "24-Channel Rack Extension", dec!(2738.67)).poe().core(),
            Product::new(CoreDevices, P::KeyPanelExtensionDesktop, "24 Channel Key Panel Extension, Desktop", "GGO-MCXDEXT", "24-Channel Desktop Extension", dec!(2738.67)).poe().core(),
            Product::new(CoreDevices, P::DectAntenna, "GreenGO -Stride DECT Antenna (US)", "GGO-STRIDEDAU", "DECT Antenna/Master Station", dec!(2847.00)).poe().core().wireless(),
            Product::new(Interfaces, P::DanteInterface, "Dante Interface", "GGO-DNTI", "Dante Audio I/O", dec!(3215.33)).poe(),
            Product::new(Interfaces, P::Quad4WireInterface, "Quad 4-Wire Interface", "GGO-Q4WR", "External 4-Wire Connection", dec!(2353.00)).poe(),
            Product::new(Interfaces, P::BridgeInterface, "Bridge Interface 4 Port", "GGO-BRIDGEX", "Connecting two Green-GO networks", dec!(2795.00)).poe(),
            Product::new(Interfaces, P::RadioInterface, "2-Way Radio Interface", "GGO-RDX", "Two-Way Radio Integration", dec!(1031.33)).poe(),
            Product::new(Interfaces, P::AudioInterface, "Audio Interface, 2 x 4-wire and 2-wire", "GGO-INTERFACEX", "Integrates 2-Wire & 4-Wire Analog Systems", dec!(1798.33)).poe(),
            Product::new(Interfaces, P::TwoWireThrowDown, "Single Port 2-Wire Throw Down Interface", "GGO-SI2W", "External 2-Wire Connection", dec!(1031.33)).poe(),
            Product::new(Interfaces, P::FourWireThrowDown, "Single Port 4-Wire or Line In/Out Throw Down Interface", "GGO-SI4W", "External 4-Wire Connection/Line I/O", dec!(1031.33)).poe(),
            Product::new(NetworkPower, P::Switch8, "8 PoE Ports + 1 Port Ethernet Switch", "GGO-SW818", "System Foundation (Network/Power)", dec!(1724.67)).poe().switch(8),
            // SW5 supplies no PoE.
            Product::new(NetworkPower, P::Switch5, "5-Port Truss Mount Ethernet Switch with PoE", "GGO-SW5", "Small Network Expansion", dec!(901.33)).switch(5),
            Product::new(NetworkPower, P::Switch6, "Switch 6, PTPv2 Enabled 6-Port PoE+ Switch", "GGO-SW6", "Small PTP/PoE Network Switch", dec!(1100.67)).poe().switch(6),
            Product::new(NetworkPower, P::ActiveAntenna, "Wireless Active Antenna", "GGO-WAA", "DECT Wireless Coverage", dec!(1993.33)).poe(),
            Product::new(NetworkPower, P::Switch18, "18-Port Gigabit Switch, 2 FO SFP cages", "GGO-SW18GBX", "Central Backbone Switch", dec!(4125.33)).poe().switch(8),
            Product::new(NetworkPower, P::FiberModule, "Fiber Optic Multimode Module (SFP)", "GGO-SFOM", "Long-distance fiber link", dec!(190.67)),
            Product::new(NetworkPower, P::BatteryCharger, "6 Way Rack Mount Battery Charger", "GGO-BC6", "Wireless Beltpack Charging", dec!(741.00)),
            Product::new(NetworkPower, P::PowerSupply, "Power Supply, 12V 1.8A DC", "GGO-PSU12V", "External Power Input", dec!(134.33)),
            Product::new(Accessories, P::HeadsetDual, "Dual Cup Headset", "GGO-HS200D", "High Noise/Focus Headset", dec!(264.33)).headset(),
            Product::new(Accessories, P::HeadsetSingle, "Single Cup Headset", "GGO-HS200S", "Primary Comm Headset", dec!(234.00)).headset(),
            Product::new(Accessories, P::ComfortHeadsetSingle, "Comfort Headset (DT 280, Single-Ear)", "BYR-DT280", "Premium Single-Ear Comm Headset", dec!(562.50)).headset(),
            Product::new(Accessories, P::ComfortHeadsetDual, "Comfort Headset (DT 290, Dual-Ear)", "BYR-DT290", "Premium Dual-Ear Comm Headset", dec!(625.00)).headset(),
            Product::new(Accessories, P::Handset, "Telephone Style Handset", "GGO-GHSA05", "Handset communication option", dec!(199.33)).headset(),
            Product::new(Accessories, P::Gooseneck300, "Electret Gooseneck Microphone (300mm)", "GGO-GNM300", "Microphone for Key Panels", dec!(199.33)),
            Product::new(Accessories, P::Gooseneck430, "Electret Gooseneck Microphone (430mm)", "GGO-GNM430", "Microphone for Key Panels (Long)", dec!(199.33)),
            Product::new(Accessories, P::Beacon, "Cue Light/Call Beacon", "GGO-BEACON", "Visual/Audio Alert Device", dec!(715.00)),
            Product::new(Accessories, P::SpareBattery, "Spare Battery for WBPX", "GGO-NRGP", "Spare Battery for Wireless Beltpacks", dec!(112.67)),
            Product::new(Accessories, P::Harness, "Beltpack Harness", "GGO-HARNESS", "Beltpack Accessory", dec!(212.33)),
            Product::new(Accessories, P::RackMountKit, "Rack Mount Kit for SW5", "GGO-RMKIT", "Rack Mount Accessory", dec!(95.33)),
            Product::new(CustomerSupplied, P::CustomerHeadset, "Customer Supplied Headset", "CUST-HSET", "Existing/Non-Purchased Comm Headset", Decimal::ZERO).headset(),
        ];

        Self { products }
    }

    /// All products in display order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Overwrites the price (and SKU, when given) of one product.
    ///
    /// Returns `false` if the product is not in this catalog.
    pub fn patch(&mut self, id: ProductId, price: Decimal, sku: Option<&str>) -> bool {
        let Some(product) = self.products.iter_mut().find(|p| p.id == id) else {
            return false;
        };
        product.price = price;
        if let Some(sku) = sku.map(str::trim).filter(|s| !s.is_empty()) {
            product.sku = sku.to_string();
        }
        true
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Flat rates applied to the equipment subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rates {
    pub labor: Decimal,
    pub programming: Decimal,
    pub support_materials: Decimal,
}

impl Default for Rates {
    fn default() -> Self {
        Self {
            labor: dec!(0.20),
            programming: dec!(0.05),
            support_materials: dec!(0.05),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_covers_every_product_id_once() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.products().len(), ProductId::ALL.len());
        for id in ProductId::ALL {
            assert_eq!(
                catalog.products().iter().filter(|p| p.id == id).count(),
                1,
                "{id} should appear exactly once"
            );
        }
    }

    #[test]
    fn catalog_order_matches_id_order() {
        let catalog = Catalog::builtin();
        let ids: Vec<ProductId> = catalog.products().iter().map(|p| p.id).collect();
        assert_eq!(ids, ProductId::ALL.to_vec());
    }

    #[test]
    fn product_code_round_trips_through_from_str() {
        for id in ProductId::ALL {
            assert_eq!(id.code().parse::<ProductId>().unwrap(), id);
        }
        assert_eq!("gbpx".parse::<ProductId>().unwrap(), ProductId::WiredBeltpack);
    }

    #[test]
    fn unknown_code_is_rejected() {
        let err = "XYZ".parse::<ProductId>().unwrap_err();
        assert_eq!(err.to_string(), "unknown product code 'XYZ'");
    }

    #[test]
    fn serde_uses_short_codes() {
        let json = serde_json::to_string(&ProductId::BridgeInterface).unwrap();
        assert_eq!(json, "\"BRIDC\"");
        let back: ProductId = serde_json::from_str("\"HSETCUST\"").unwrap();
        assert_eq!(back, ProductId::CustomerHeadset);
    }

    #[test]
    fn switch_flags_and_ports() {
        let catalog = Catalog::builtin();
        let sw8 = catalog.get(ProductId::Switch8).unwrap();
        assert!(sw8.is_switch && sw8.is_poe);
        assert_eq!(sw8.ports, Some(8));

        let sw5 = catalog.get(ProductId::Switch5).unwrap();
        assert!(sw5.is_switch);
        assert!(!sw5.is_poe, "SW5 must not contribute PoE ports");
    }

    #[test]
    fn customer_headset_is_free_headset() {
        let catalog = Catalog::builtin();
        let cust = catalog.get(ProductId::CustomerHeadset).unwrap();
        assert!(cust.is_headset);
        assert_eq!(cust.price, Decimal::ZERO);
    }

    #[test]
    fn patch_overwrites_price_and_sku() {
        let mut catalog = Catalog::builtin();
        assert!(catalog.patch(ProductId::WiredBeltpack, dec!(999.99), Some("GGO-GBPX-2")));
        let gbpx = catalog.get(ProductId::WiredBeltpack).unwrap();
        assert_eq!(gbpx.price, dec!(999.99));
        assert_eq!(gbpx.sku, "GGO-GBPX-2");
    }

    #[test]
    fn patch_without_sku_keeps_builtin_sku() {
        let mut catalog = Catalog::builtin();
        assert!(catalog.patch(ProductId::Beacon, dec!(700), None));
        assert!(catalog.patch(ProductId::Beacon, dec!(701), Some("  ")));
        let bcon = catalog.get(ProductId::Beacon).unwrap();
        assert_eq!(bcon.price, dec!(701));
        assert_eq!(bcon.sku, "GGO-BEACON");
    }

    #[test]
    fn default_rates() {
        let rates = Rates::default();
        assert_eq!(rates.labor, dec!(0.20));
        assert_eq!(rates.programming, dec!(0.05));
        assert_eq!(rates.support_materials, dec!(0.05));
    }
}
