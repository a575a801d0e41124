use clap::ValueEnum;

/// Helper function to use JavaScript's Math.random
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    u64::from_be_bytes([
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
    ])
}

/// Language of the texts around the board.
#[derive(ValueEnum, Copy, Clone, Debug, Default, PartialEq)]
pub(crate) enum Lang {
    #[default]
    Zh,
    En,
}

impl Lang {
    pub(crate) fn running_time(self, secs: u32) -> String {
        format!("Time: {secs}s")
    }

    pub(crate) fn final_time(self, secs: u32) -> String {
        match self {
            Lang::Zh => format!("用时: {secs}秒"),
            Lang::En => format!("Time: {secs}s"),
        }
    }

    pub(crate) const fn congrats(self) -> &'static str {
        match self {
            Lang::Zh => "恭喜你！",
            Lang::En => "Well done!",
        }
    }

    pub(crate) const fn new_game(self) -> &'static str {
        match self {
            Lang::Zh => "再来一局",
            Lang::En => "New game",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn final_time_is_localized() {
        assert_eq!(Lang::Zh.final_time(42), "用时: 42秒");
        assert_eq!(Lang::En.final_time(42), "Time: 42s");
        assert_eq!(Lang::Zh.running_time(3), "Time: 3s");
    }
}
