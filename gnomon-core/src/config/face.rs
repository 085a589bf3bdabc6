//! Illustrated clock faces
//!
//! A face is a picture drawn behind the hands. The engine only tracks the
//! selection; the renderer loads the image from `image_path`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Selectable face artwork, `None` for the plain dial
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum ClockFace {
    #[default]
    None,
    Sun,
    Animal,
    SportsCar,
    Bomb,
    Ninja,
    Submarine,
    Cyberpunk,
    SportsStadium,
    Jungle,
    MagicalForest,
    DreamySky,
    Mermaids,
    RainbowCastle,
    CuteRocket,
    CupcakesDonuts,
    Unicorn,
    AnimalBedroom,
    GardenButterflies,
    AnimalFriends,
    CuteFashionAnimal,
    Dinosaur,
    Dragon,
    FairyTaleGarden,
    Football,
    GardenButterfly,
    MagicalCastle,
    Mermaid,
    Pirate,
    RainbowAnimal,
    Robot,
    Space,
    SweetsTheme,
}

impl ClockFace {
    /// All faces in picker order, the plain dial first
    pub const ALL: [ClockFace; 33] = [
        ClockFace::None,
        ClockFace::Sun,
        ClockFace::Animal,
        ClockFace::SportsCar,
        ClockFace::Bomb,
        ClockFace::Ninja,
        ClockFace::Submarine,
        ClockFace::Cyberpunk,
        ClockFace::SportsStadium,
        ClockFace::Jungle,
        ClockFace::MagicalForest,
        ClockFace::DreamySky,
        ClockFace::Mermaids,
        ClockFace::RainbowCastle,
        ClockFace::CuteRocket,
        ClockFace::CupcakesDonuts,
        ClockFace::Unicorn,
        ClockFace::AnimalBedroom,
        ClockFace::GardenButterflies,
        ClockFace::AnimalFriends,
        ClockFace::CuteFashionAnimal,
        ClockFace::Dinosaur,
        ClockFace::Dragon,
        ClockFace::FairyTaleGarden,
        ClockFace::Football,
        ClockFace::GardenButterfly,
        ClockFace::MagicalCastle,
        ClockFace::Mermaid,
        ClockFace::Pirate,
        ClockFace::RainbowAnimal,
        ClockFace::Robot,
        ClockFace::Space,
        ClockFace::SweetsTheme,
    ];

    /// Key as used in configuration and on the console
    pub const fn name(&self) -> &'static str {
        match self {
            ClockFace::None => "none",
            ClockFace::Sun => "sun",
            ClockFace::Animal => "animal",
            ClockFace::SportsCar => "sportsCar",
            ClockFace::Bomb => "bomb",
            ClockFace::Ninja => "ninja",
            ClockFace::Submarine => "submarine",
            ClockFace::Cyberpunk => "cyberpunk",
            ClockFace::SportsStadium => "sportsStadium",
            ClockFace::Jungle => "jungle",
            ClockFace::MagicalForest => "magicalForest",
            ClockFace::DreamySky => "dreamySky",
            ClockFace::Mermaids => "mermaids",
            ClockFace::RainbowCastle => "rainbowCastle",
            ClockFace::CuteRocket => "cuteRocket",
            ClockFace::CupcakesDonuts => "cupcakesDonuts",
            ClockFace::Unicorn => "unicorn",
            ClockFace::AnimalBedroom => "animalBedroom",
            ClockFace::GardenButterflies => "gardenButterflies",
            ClockFace::AnimalFriends => "animalFriends",
            ClockFace::CuteFashionAnimal => "cuteFashionAnimal",
            ClockFace::Dinosaur => "dinosaur",
            ClockFace::Dragon => "dragon",
            ClockFace::FairyTaleGarden => "fairyTaleGarden",
            ClockFace::Football => "football",
            ClockFace::GardenButterfly => "gardenButterfly",
            ClockFace::MagicalCastle => "magicalCastle",
            ClockFace::Mermaid => "mermaid",
            ClockFace::Pirate => "pirate",
            ClockFace::RainbowAnimal => "rainbowAnimal",
            ClockFace::Robot => "robot",
            ClockFace::Space => "space",
            ClockFace::SweetsTheme => "sweetsTheme",
        }
    }

    /// Look a face up by key
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|face| face.name() == name)
    }

    /// Display name for the picker
    pub const fn label(&self) -> &'static str {
        match self {
            ClockFace::None => "None",
            ClockFace::Sun => "Sun",
            ClockFace::Animal => "Cute Animal",
            ClockFace::SportsCar => "Sports Car",
            ClockFace::Bomb => "Bomb",
            ClockFace::Ninja => "Ninja",
            ClockFace::Submarine => "Submarine",
            ClockFace::Cyberpunk => "Cyberpunk",
            ClockFace::SportsStadium => "Sports Stadium",
            ClockFace::Jungle => "Jungle",
            ClockFace::MagicalForest => "Magical Forest",
            ClockFace::DreamySky => "Dreamy Sky",
            ClockFace::Mermaids => "Mermaids",
            ClockFace::RainbowCastle => "Rainbow Castle",
            ClockFace::CuteRocket => "Cute Rocket",
            ClockFace::CupcakesDonuts => "Cupcakes & Donuts",
            ClockFace::Unicorn => "Unicorn",
            ClockFace::AnimalBedroom => "Animal Bedroom",
            ClockFace::GardenButterflies => "Garden Butterflies",
            ClockFace::AnimalFriends => "Animal Friends",
            ClockFace::CuteFashionAnimal => "Cute Fashion Animal",
            ClockFace::Dinosaur => "Dinosaur",
            ClockFace::Dragon => "Dragon",
            ClockFace::FairyTaleGarden => "Fairy Tale Garden",
            ClockFace::Football => "Football",
            ClockFace::GardenButterfly => "Garden Butterfly",
            ClockFace::MagicalCastle => "Magical Castle",
            ClockFace::Mermaid => "Mermaid",
            ClockFace::Pirate => "Pirate",
            ClockFace::RainbowAnimal => "Rainbow Animal",
            ClockFace::Robot => "Robot",
            ClockFace::Space => "Space",
            ClockFace::SweetsTheme => "Sweets Theme",
        }
    }

    /// Image served for this face, `None` for the plain dial
    pub const fn image_path(&self) -> Option<&'static str> {
        let path = match self {
            ClockFace::None => return None,
            ClockFace::Sun => "/clock-faces/clock-face-sun.png",
            ClockFace::Animal => "/clock-faces/clock-face-cute-animal.png",
            ClockFace::SportsCar => "/clock-faces/clock-face-sports-car.png",
            ClockFace::Bomb => "/clock-faces/clock-face-bomb.png",
            ClockFace::Ninja => "/clock-faces/clock-face-ninja.png",
            ClockFace::Submarine => "/clock-faces/clock-face-submarine.png",
            ClockFace::Cyberpunk => "/clock-faces/clock-face-cyberpunk.png",
            ClockFace::SportsStadium => "/clock-faces/clock-face-sports-stadium.png",
            ClockFace::Jungle => "/clock-faces/clock-face-jungle.png",
            ClockFace::MagicalForest => "/clock-faces/clock-face-magical-forest.png",
            ClockFace::DreamySky => "/clock-faces/clock-face-dreamy-sky.png",
            ClockFace::Mermaids => "/clock-faces/clock-face-mermaids.png",
            ClockFace::RainbowCastle => "/clock-faces/clock-face-rainbow-castle.png",
            ClockFace::CuteRocket => "/clock-faces/clock-face-cute-rocket.png",
            ClockFace::CupcakesDonuts => "/clock-faces/clock-face-cupcakes-donuts.png",
            ClockFace::Unicorn => "/clock-faces/clock-face-unicorn.png",
            ClockFace::AnimalBedroom => "/clock-faces/clock-face-animal-bedroom.png",
            ClockFace::GardenButterflies => "/clock-faces/clock-face-garden-butterflies.png",
            ClockFace::AnimalFriends => "/clock-faces/clock-face-animal-friends.png",
            // Asset file name is misspelled upstream
            ClockFace::CuteFashionAnimal => "/clock-faces/clock-face-cute-fasion-animal.png",
            ClockFace::Dinosaur => "/clock-faces/clock-face-dinosaur.png",
            ClockFace::Dragon => "/clock-faces/clock-face-dragon.png",
            ClockFace::FairyTaleGarden => "/clock-faces/clock-face-fairy-tale-garden.png",
            ClockFace::Football => "/clock-faces/clock-face-football.png",
            ClockFace::GardenButterfly => "/clock-faces/clock-face-garden-butterfly.png",
            ClockFace::MagicalCastle => "/clock-faces/clock-face-magical-castle.png",
            ClockFace::Mermaid => "/clock-faces/clock-face-mermaid.png",
            ClockFace::Pirate => "/clock-faces/clock-face-pirate.png",
            ClockFace::RainbowAnimal => "/clock-faces/clock-face-rainbow-animal.png",
            ClockFace::Robot => "/clock-faces/clock-face-robot.png",
            ClockFace::Space => "/clock-faces/clock-face-space.png",
            ClockFace::SweetsTheme => "/clock-faces/clock-face-sweets-theme.png",
        };
        Some(path)
    }
}
