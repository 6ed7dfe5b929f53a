//! Well-known record identities used by the default configuration

// Crafting components
pub const BONE_MEAL: &str = "BoneMeal";
pub const LEATHER: &str = "Leather01";
pub const LEATHER_STRIPS: &str = "LeatherStrips";
pub const INGOT_IRON: &str = "IngotIron";
pub const INGOT_STEEL: &str = "IngotSteel";
pub const INGOT_SILVER: &str = "IngotSilver";
pub const INGOT_CORUNDUM: &str = "IngotCorundum";
pub const INGOT_DWARVEN: &str = "IngotDwarven";
pub const INGOT_MOONSTONE: &str = "IngotMoonstone";
pub const INGOT_QUICKSILVER: &str = "IngotQuicksilver";
pub const INGOT_ORICHALCUM: &str = "IngotOrichalcum";
pub const INGOT_MALACHITE: &str = "IngotMalachite";
pub const INGOT_EBONY: &str = "IngotEbony";
pub const INGOT_GOLD: &str = "IngotGold";
pub const DRAGON_BONE: &str = "DragonBone";
pub const DRAGON_SCALES: &str = "DragonScales";
pub const ORE_STALHRIM: &str = "OreStalhrim";

// Items fed to the default custom breakdown entries
pub const IRON_MACE_BROKEN_HANDLE: &str = "IronMaceBrokenHandle";
pub const IRON_MACE_BROKEN_TOP: &str = "IronMaceBrokenTop";
pub const IRON_SWORD_BROKEN_HANDLE: &str = "IronSwordBrokenHandle";
pub const IRON_SWORD_BROKEN_TOP: &str = "IronSwordBrokenTop";
pub const IRON_WAR_AXE_BROKEN_HANDLE: &str = "IronWarAxeBrokenHandle";
pub const IRON_WAR_AXE_BROKEN_TOP: &str = "IronWarAxeBrokenTop";
pub const GOLD_COIN: &str = "Gold001";
pub const FIREWOOD: &str = "Firewood01";
pub const COAL: &str = "Coal01";
pub const CHARCOAL: &str = "Charcoal";
pub const DWARVEN_BOWL_01: &str = "DwarvenBowl01";
pub const DWARVEN_BOWL_02: &str = "DwarvenBowl02";
pub const DWARVEN_BOWL_03: &str = "DwarvenBowl03";
pub const DWARVEN_COG: &str = "DwarvenCog";
pub const DWARVEN_GEAR: &str = "DwarvenGear";
pub const DWARVEN_SCRAP_METAL: &str = "DwarvenScrapMetal";

// Station keywords carrying tempering recipes; excluded by default
pub const SMITHING_ARMOR_TABLE: &str = "CraftingSmithingArmorTable";
pub const SMITHING_SHARPENING_WHEEL: &str = "CraftingSmithingSharpeningWheel";

// Perks
pub const PERK_DWARVEN_SMITHING: &str = "DwarvenSmithing";
