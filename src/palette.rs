// src/palette.rs

use rand::Rng;

use crate::generator::uniform_int;

pub type Color = [f32; 4];

const DEFAULT_COLORS: [Color; 9] = [
    [0.925_490_2, 0.235_294_12, 0.101_960_786, 1.0],
    [0.999_424_04, 0.985_553_7, 0.0, 1.0],
    [0.109_007_65, 0.808_973_1, 0.102_115_89, 1.0],
    [0.219_607_84, 0.007_843_138, 0.854_901_97, 1.0],
    [0.854_901_97, 0.250_980_4, 0.478_431_37, 1.0],
    [0.308_401_1, 0.561_822_95, 0.0, 1.0],
    [0.258_823_54, 0.756_862_76, 0.968_627_45, 1.0],
    [0.960_784_3, 0.705_882_4, 0.2, 1.0],
    [0.909_803_9, 0.478_431_37, 0.643_137_26, 1.0],
];

#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS.to_vec(),
        }
    }
}

impl Palette {
    pub fn new(colors: Vec<Color>) -> Self {
        Self { colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }
}

/// Tracks which palette entries are held by live shapes so that no two live
/// shapes share a colour.
#[derive(Clone, Debug)]
pub struct ColorPool {
    palette: Palette,
    in_use: Vec<bool>,
}

impl ColorPool {
    pub fn new(palette: Palette) -> Self {
        let in_use = vec![false; palette.len()];
        Self { palette, in_use }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn available(&self) -> usize {
        self.in_use.iter().filter(|used| !**used).count()
    }

    pub fn is_in_use(&self, index: usize) -> bool {
        self.in_use.get(index).copied().unwrap_or(false)
    }

    /// Picks uniformly among the free entries and marks it used.
    pub fn acquire<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<usize> {
        let free: Vec<usize> = self
            .in_use
            .iter()
            .enumerate()
            .filter_map(|(index, used)| (!used).then_some(index))
            .collect();
        if free.is_empty() {
            return None;
        }
        let pick = free[uniform_int(rng, 0, free.len() as i32 - 1) as usize];
        self.in_use[pick] = true;
        Some(pick)
    }

    /// Returns `false` when the entry was not held.
    pub fn release(&mut self, index: usize) -> bool {
        match self.in_use.get_mut(index) {
            Some(used) if *used => {
                *used = false;
                true
            }
            _ => false,
        }
    }
}
