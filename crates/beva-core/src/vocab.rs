//! Closed label sets used by the evaluation forms.
//!
//! Each enum carries the exact label the UI renders, both as its serde
//! representation and its `Display` output, so a persisted evaluation can be
//! read back without a mapping table. Free-text values never flow through
//! these types.

use serde::{Deserialize, Serialize};

/// Where the product is placed inside the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShelfLocation {
    #[serde(rename = "Exhibición principal")]
    MainDisplay,
    #[serde(rename = "Góndola de frutas")]
    FruitAisle,
    #[serde(rename = "Refrigerador")]
    Refrigerator,
    #[serde(rename = "Bodega")]
    BackRoom,
    #[serde(rename = "Punta de góndola")]
    EndCap,
}

impl std::fmt::Display for ShelfLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ShelfLocation::MainDisplay => "Exhibición principal",
            ShelfLocation::FruitAisle => "Góndola de frutas",
            ShelfLocation::Refrigerator => "Refrigerador",
            ShelfLocation::BackRoom => "Bodega",
            ShelfLocation::EndCap => "Punta de góndola",
        };
        write!(f, "{label}")
    }
}

/// Overall condition of the display area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayCondition {
    Excelente,
    Bueno,
    Regular,
    Malo,
}

impl std::fmt::Display for DisplayCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            DisplayCondition::Excelente => "Excelente",
            DisplayCondition::Bueno => "Bueno",
            DisplayCondition::Regular => "Regular",
            DisplayCondition::Malo => "Malo",
        };
        write!(f, "{label}")
    }
}

/// Visual appearance of the fruit itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Appearance {
    Excelente,
    Buena,
    Regular,
    Mala,
}

impl std::fmt::Display for Appearance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Appearance::Excelente => "Excelente",
            Appearance::Buena => "Buena",
            Appearance::Regular => "Regular",
            Appearance::Mala => "Mala",
        };
        write!(f, "{label}")
    }
}

/// Condition of the clamshell or packaging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PackagingCondition {
    #[serde(rename = "Intacto")]
    Intact,
    #[serde(rename = "Levemente dañado")]
    SlightlyDamaged,
    #[serde(rename = "Dañado")]
    Damaged,
    #[serde(rename = "Muy dañado")]
    SeverelyDamaged,
}

impl std::fmt::Display for PackagingCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            PackagingCondition::Intact => "Intacto",
            PackagingCondition::SlightlyDamaged => "Levemente dañado",
            PackagingCondition::Damaged => "Dañado",
            PackagingCondition::SeverelyDamaged => "Muy dañado",
        };
        write!(f, "{label}")
    }
}

/// Incident severity, required only when a real incident was flagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Baja,
    Media,
    Alta,
    #[serde(rename = "Crítica")]
    Critica,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Severity::Baja => "Baja",
            Severity::Media => "Media",
            Severity::Alta => "Alta",
            Severity::Critica => "Crítica",
        };
        write!(f, "{label}")
    }
}

/// Incident categories a promoter can flag during the final stage.
///
/// `NoIncidents` is a distinct sentinel, not a magic string: selecting it
/// means "everything OK" and short-circuits the incident requirements even
/// when other types were accidentally left checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncidentType {
    #[serde(rename = "✅ No incidents / Everything OK")]
    NoIncidents,
    #[serde(rename = "Producto vencido")]
    ExpiredProduct,
    #[serde(rename = "Empaque dañado")]
    DamagedPackaging,
    #[serde(rename = "Precio incorrecto")]
    IncorrectPrice,
    #[serde(rename = "Producto en mal estado")]
    SpoiledProduct,
    #[serde(rename = "Falta de stock")]
    OutOfStock,
    #[serde(rename = "Exhibición incorrecta")]
    WrongDisplay,
    #[serde(rename = "Otro")]
    Other,
}

impl IncidentType {
    /// Returns `true` for every variant except the `NoIncidents` sentinel.
    #[must_use]
    pub fn is_real(self) -> bool {
        !matches!(self, IncidentType::NoIncidents)
    }
}

impl std::fmt::Display for IncidentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            IncidentType::NoIncidents => "✅ No incidents / Everything OK",
            IncidentType::ExpiredProduct => "Producto vencido",
            IncidentType::DamagedPackaging => "Empaque dañado",
            IncidentType::IncorrectPrice => "Precio incorrecto",
            IncidentType::SpoiledProduct => "Producto en mal estado",
            IncidentType::OutOfStock => "Falta de stock",
            IncidentType::WrongDisplay => "Exhibición incorrecta",
            IncidentType::Other => "Otro",
        };
        write!(f, "{label}")
    }
}

/// Promotion mechanics observed at the shelf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Promotion {
    #[serde(rename = "Descuento porcentual")]
    PercentDiscount,
    #[serde(rename = "2x1")]
    TwoForOne,
    #[serde(rename = "Precio rebajado")]
    ReducedPrice,
    #[serde(rename = "Combo")]
    Combo,
    #[serde(rename = "Sin promoción")]
    NoPromotion,
}

impl std::fmt::Display for Promotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Promotion::PercentDiscount => "Descuento porcentual",
            Promotion::TwoForOne => "2x1",
            Promotion::ReducedPrice => "Precio rebajado",
            Promotion::Combo => "Combo",
            Promotion::NoPromotion => "Sin promoción",
        };
        write!(f, "{label}")
    }
}

/// The acting user's role, as supplied by the session context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Promoter,
    Supervisor,
    Admin,
}

impl Role {
    /// Whether this role may bypass the geofence gate (test mode).
    #[must_use]
    pub fn can_override_geofence(self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Role::Promoter => "promoter",
            Role::Supervisor => "supervisor",
            Role::Admin => "admin",
        };
        write!(f, "{label}")
    }
}
