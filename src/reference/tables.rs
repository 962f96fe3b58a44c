//! Built-in Traveller reference tables

use once_cell::sync::Lazy;

use super::types::*;

// =============================================================================
// Core UWP Positions
// =============================================================================

pub static STARPORT: &[(&str, &str)] = &[
    ("A", "Excellent quality installation. Refined fuel. Shipyard capable of building starships. Overhaul available."),
    ("B", "Good quality installation. Refined fuel. Shipyard capable of building spacecraft. Overhaul available."),
    ("C", "Routine quality installation. Unrefined fuel. Reasonable repair facilities."),
    ("D", "Poor quality installation. Unrefined fuel. No repair or shipyard facilities."),
    ("E", "Frontier installation. Essentially a marked spot of bedrock with no fuel, facilities, or bases."),
    ("X", "No starport. Usually indicates an interdicted world."),
    ("F", "Good quality spaceport. Minor repair facilities. Unrefined fuel."),
    ("G", "Poor quality spaceport. Superficial repair facilities. Unrefined fuel."),
    ("H", "Primitive spaceport. No repair facilities or fuel."),
    ("Y", "No spaceport."),
];

pub static SIZE: &[(&str, &str)] = &[
    ("0", "Asteroid or planetoid belt, under 800 km"),
    ("1", "1,600 km diameter, 0.05 G"),
    ("2", "3,200 km diameter, 0.15 G"),
    ("3", "4,800 km diameter, 0.25 G"),
    ("4", "6,400 km diameter, 0.35 G"),
    ("5", "8,000 km diameter, 0.45 G"),
    ("6", "9,600 km diameter, 0.7 G"),
    ("7", "11,200 km diameter, 0.9 G"),
    ("8", "12,800 km diameter, 1.0 G"),
    ("9", "14,400 km diameter, 1.25 G"),
    ("A", "16,000 km diameter, 1.4 G"),
];

pub static ATMOSPHERE: &[(&str, &str)] = &[
    ("0", "None. Vacc suit required."),
    ("1", "Trace. Vacc suit required."),
    ("2", "Very thin, tainted. Respirator and filter required."),
    ("3", "Very thin. Respirator required."),
    ("4", "Thin, tainted. Filter required."),
    ("5", "Thin. Breathable."),
    ("6", "Standard. Breathable."),
    ("7", "Standard, tainted. Filter required."),
    ("8", "Dense. Breathable."),
    ("9", "Dense, tainted. Filter required."),
    ("A", "Exotic. Air supply required."),
    ("B", "Corrosive. Vacc suit required."),
    ("C", "Insidious. Vacc suit required."),
    ("D", "Very dense. Breathable at high altitude only."),
    ("E", "Low. Breathable at low altitude only."),
    ("F", "Unusual. Conditions vary."),
];

pub static HYDROGRAPHICS: &[(&str, &str)] = &[
    ("0", "Desert world, 0-5% water"),
    ("1", "Dry world, 6-15% water"),
    ("2", "A few small seas, 16-25% water"),
    ("3", "Small seas and oceans, 26-35% water"),
    ("4", "Wet world, 36-45% water"),
    ("5", "Large oceans, 46-55% water"),
    ("6", "Large oceans, 56-65% water"),
    ("7", "Earth-like world, 66-75% water"),
    ("8", "Water world, 76-85% water"),
    ("9", "Only a few small islands and archipelagos, 86-95% water"),
    ("A", "Almost entirely water, 96-100%"),
];

pub static POPULATION: &[(&str, &str)] = &[
    ("0", "None"),
    ("1", "Few, 1+"),
    ("2", "Hundreds, 100+"),
    ("3", "Thousands, 1,000+"),
    ("4", "Tens of thousands, 10,000+"),
    ("5", "Hundreds of thousands, 100,000+"),
    ("6", "Millions, 1,000,000+"),
    ("7", "Tens of millions, 10,000,000+"),
    ("8", "Hundreds of millions, 100,000,000+"),
    ("9", "Billions, 1,000,000,000+"),
    ("A", "Tens of billions, 10,000,000,000+"),
    ("B", "Hundreds of billions, 100,000,000,000+"),
    ("C", "Trillions, 1,000,000,000,000+"),
];

pub static GOVERNMENT: &[(&str, &str)] = &[
    ("0", "None. Family or clan structures."),
    ("1", "Company/Corporation. Ruling functions assumed by a managerial elite."),
    ("2", "Participating Democracy. Ruling functions reached by advice and consent of the citizenry directly."),
    ("3", "Self-Perpetuating Oligarchy. Ruling functions performed by a restricted minority."),
    ("4", "Representative Democracy. Ruling functions performed by elected representatives."),
    ("5", "Feudal Technocracy. Ruling functions performed by specific individuals for those who agree to be ruled."),
    ("6", "Captive Government. Ruling functions performed by an imposed leadership answerable to an outside group."),
    ("7", "Balkanization. No central authority exists; rival governments compete for control."),
    ("8", "Civil Service Bureaucracy. Ruling functions performed by government agencies."),
    ("9", "Impersonal Bureaucracy. Ruling functions performed by agencies insulated from the governed citizens."),
    ("A", "Charismatic Dictator. Ruling functions performed by agencies directed by a single leader."),
    ("B", "Non-Charismatic Leader. A previous charismatic dictator has been replaced by a leader through normal channels."),
    ("C", "Charismatic Oligarchy. Ruling functions performed by a select group of members of an organization."),
    ("D", "Religious Dictatorship. Ruling functions performed by a religious organization without regard to citizen needs."),
    ("E", "Religious Autocracy. Government by a single religious leader with absolute power."),
    ("F", "Totalitarian Oligarchy. Government by an all-powerful minority maintaining control through coercion."),
];

pub static LAW_LEVEL: &[(&str, &str)] = &[
    ("0", "No law. No prohibitions."),
    ("1", "Low law. Poison gas, explosives, undetectable weapons and weapons of mass destruction prohibited."),
    ("2", "Low law. Portable energy weapons (except ship-mounted) prohibited."),
    ("3", "Low law. Machine guns, automatic rifles prohibited."),
    ("4", "Moderate law. Light assault weapons and submachine guns prohibited."),
    ("5", "Moderate law. Personal concealable weapons prohibited."),
    ("6", "Moderate law. All firearms except shotguns and stunners prohibited."),
    ("7", "High law. Shotguns prohibited."),
    ("8", "High law. Long bladed weapons controlled; open possession prohibited."),
    ("9", "High law. Possession of any weapon outside one's residence prohibited."),
    ("A", "Extreme law. Weapon possession prohibited; travellers heavily monitored."),
    ("B", "Extreme law. Rigid control of civilian movement."),
    ("C", "Extreme law. Unrestricted invasion of privacy."),
    ("D", "Extreme law. Paramilitary law enforcement."),
    ("E", "Extreme law. Full-fledged police state."),
    ("F", "Extreme law. All facets of daily life rigidly controlled."),
    ("G", "Extreme law. Severe punishment for petty infractions."),
    ("H", "Extreme law. Legalized oppressive practices."),
    ("I", "Extreme law. Routinely oppressive and restrictive."),
    ("J", "Extreme law. Excessively oppressive and restrictive."),
];

pub static TECH_LEVEL: &[(&str, &str)] = &[
    ("0", "Primitive. Stone Age, fire."),
    ("1", "Primitive. Bronze Age to Middle Ages."),
    ("2", "Primitive. Age of Sail, circa 1400 to 1700."),
    ("3", "Primitive. Industrial Revolution, circa 1700 to 1860."),
    ("4", "Industrial. Mechanized age, circa 1860 to 1900."),
    ("5", "Industrial. Broadcast age, circa 1900 to 1940."),
    ("6", "Industrial. Atomic age, circa 1940 to 1970."),
    ("7", "Pre-Stellar. Space age, circa 1970 to 2000."),
    ("8", "Pre-Stellar. Information age, reach other worlds in the same system."),
    ("9", "Pre-Stellar. Gravity manipulation, orbital habitats."),
    ("A", "Early Stellar. Jump drive, Jump-1."),
    ("B", "Early Stellar. Jump-2, early artificial intelligence."),
    ("C", "Average Stellar. Jump-3, weather control."),
    ("D", "Average Stellar. Jump-4, battle dress."),
    ("E", "Average Stellar. Fusion weapons man-portable."),
    ("F", "High Stellar. Jump-5, black globe generators. Imperial maximum."),
    ("G", "High Stellar. Jump-6, fully robotic factories."),
    ("H", "Extreme Stellar. Artificial life, personal disintegrators."),
    ("J", "Extreme Stellar. Anti-matter power."),
    ("K", "Extreme Stellar. Matter transport, skip drives."),
    ("L", "Extreme Stellar. Stasis fields, near-total control of matter."),
];

// =============================================================================
// Trailer Annotations
// =============================================================================

pub static BASES: &[(&str, &str)] = &[
    ("N", "Naval Base"),
    ("S", "Scout Base"),
    ("W", "Scout Way Station"),
    ("D", "Naval Depot"),
    ("M", "Military Base"),
    ("C", "Corsair Base"),
    ("K", "Naval Base (alternate)"),
    ("B", "Naval Base and Scout Way Station"),
];

pub static TRAVEL_ZONE: &[(&str, &str)] = &[
    ("A", "Amber Zone. Travellers should exercise caution."),
    ("R", "Red Zone. Travel is prohibited or interdicted."),
];

pub static TRADE_CODES: &[(&str, &str)] = &[
    ("Ag", "Agricultural"),
    ("As", "Asteroid"),
    ("Ba", "Barren"),
    ("De", "Desert"),
    ("Fl", "Fluid Oceans"),
    ("Ga", "Garden"),
    ("He", "Hellworld"),
    ("Hi", "High Population"),
    ("Ht", "High Technology"),
    ("Ic", "Ice-Capped"),
    ("In", "Industrial"),
    ("Lo", "Low Population"),
    ("Lt", "Low Technology"),
    ("Na", "Non-Agricultural"),
    ("Ni", "Non-Industrial"),
    ("Oc", "Ocean World"),
    ("Po", "Poor"),
    ("Ri", "Rich"),
    ("Va", "Vacuum"),
    ("Wa", "Water World"),
];

pub static ALLEGIANCES: &[(&str, &str)] = &[
    ("Im", "Third Imperium"),
    ("Zh", "Zhodani Consulate"),
    ("As", "Aslan Hierate"),
    ("Va", "Vargr (various)"),
    ("So", "Solomani Confederation"),
    ("Hv", "Hiver Federation"),
    ("Kk", "Two Thousand Worlds (K'kree)"),
    ("Na", "Non-Aligned"),
];

/// Built-in store, initialised on first use and never mutated
static BUILTIN: Lazy<ReferenceData> = Lazy::new(|| ReferenceData {
    starport: ReferenceTable::from_pairs(STARPORT),
    size: ReferenceTable::from_pairs(SIZE),
    atmosphere: ReferenceTable::from_pairs(ATMOSPHERE),
    hydrographics: ReferenceTable::from_pairs(HYDROGRAPHICS),
    population: ReferenceTable::from_pairs(POPULATION),
    government: ReferenceTable::from_pairs(GOVERNMENT),
    law_level: ReferenceTable::from_pairs(LAW_LEVEL),
    tech_level: ReferenceTable::from_pairs(TECH_LEVEL),
    bases: ReferenceTable::from_pairs(BASES),
    travel_zone: ReferenceTable::from_pairs(TRAVEL_ZONE),
    trade_codes: ReferenceTable::from_pairs(TRADE_CODES),
    allegiances: ReferenceTable::from_pairs(ALLEGIANCES),
});

/// The process-wide built-in reference data
pub fn builtin() -> &'static ReferenceData {
    &BUILTIN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_populated() {
        for category in Category::ALL {
            assert!(
                !builtin().table(category).is_empty(),
                "{} table is empty",
                category
            );
        }
    }

    #[test]
    fn test_codes_unique_within_tables() {
        for category in Category::ALL {
            let table = builtin().table(category);
            for (i, entry) in table.entries().iter().enumerate() {
                assert!(
                    table.entries()[..i].iter().all(|e| e.code != entry.code),
                    "duplicate code {} in {}",
                    entry.code,
                    category
                );
            }
        }
    }

    #[test]
    fn test_code_widths() {
        let single = [
            Category::Starport,
            Category::Size,
            Category::Atmosphere,
            Category::Hydrographics,
            Category::Population,
            Category::Government,
            Category::LawLevel,
            Category::TechLevel,
            Category::Bases,
            Category::TravelZone,
        ];
        for category in single {
            assert!(builtin()
                .table(category)
                .entries()
                .iter()
                .all(|e| e.code.chars().count() == 1));
        }
        assert!(builtin()
            .trade_codes
            .entries()
            .iter()
            .all(|e| e.code.chars().count() == 2));
    }
}
