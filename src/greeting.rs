// Time-of-day greeting shown under the clock.

// The five greetings, picked by the 24-hour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Greeting {
    // 00:00 - 05:59
    LateNight,
    // 06:00 - 11:59
    Morning,
    // 12:00 - 16:59
    Afternoon,
    // 17:00 - 19:59
    Evening,
    // 20:00 - 23:59
    Night,
}

impl Greeting {
    // Ordered threshold checks; each range includes its start hour.
    pub fn for_hour(hour: u32) -> Greeting {
        if hour < 6 {
            Greeting::LateNight
        } else if hour < 12 {
            Greeting::Morning
        } else if hour < 17 {
            Greeting::Afternoon
        } else if hour < 20 {
            Greeting::Evening
        } else {
            Greeting::Night
        }
    }

    // The Myanmar greeting. Needs a font with Myanmar glyphs, and macroquad
    // draws text glyph by glyph with no shaping, so stacked consonants and
    // kinzi come out as separate marks. No emoji: no TTF we load carries them.
    pub fn text(self) -> &'static str {
        match self {
            Greeting::LateNight => "မင်္ဂလာညနေခင်းပါ",
            Greeting::Morning => "မင်္ဂလာနံနက်ခင်းပါ",
            Greeting::Afternoon => "မင်္ဂလာနေ့လယ်ခင်းပါ",
            Greeting::Evening => "မင်္ဂလာညနေခင်းပါ",
            Greeting::Night => "အနားယူချိန်ဖြစ်နေပါပြီ",
        }
    }

    // Plain ASCII stand-in for when only macroquad's built-in font is available.
    pub fn ascii(self) -> &'static str {
        match self {
            Greeting::LateNight => "Good night",
            Greeting::Morning => "Good morning",
            Greeting::Afternoon => "Good afternoon",
            Greeting::Evening => "Good evening",
            Greeting::Night => "Time to rest",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries() {
        let cases = [
            (0, Greeting::LateNight),
            (5, Greeting::LateNight),
            (6, Greeting::Morning),
            (11, Greeting::Morning),
            (12, Greeting::Afternoon),
            (16, Greeting::Afternoon),
            (17, Greeting::Evening),
            (19, Greeting::Evening),
            (20, Greeting::Night),
            (23, Greeting::Night),
        ];
        for (hour, expected) in cases {
            assert_eq!(Greeting::for_hour(hour), expected, "hour {hour}");
        }
    }

    #[test]
    fn every_hour_has_a_greeting() {
        for hour in 0..24 {
            let g = Greeting::for_hour(hour);
            assert!(!g.text().is_empty());
            assert!(g.ascii().is_ascii());
        }
    }

    #[test]
    fn greetings_are_pure_myanmar_script() {
        let myanmar = '\u{1000}'..='\u{109F}';
        for hour in 0..24 {
            let text = Greeting::for_hour(hour).text();
            assert!(
                text.chars().all(|c| myanmar.contains(&c)),
                "hour {hour}: {text:?}"
            );
        }
    }

    #[test]
    fn the_two_night_greetings_differ() {
        assert_ne!(Greeting::LateNight.text(), Greeting::Night.text());
    }
}
