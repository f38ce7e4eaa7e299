//! The fixed train announcements offered on the dashboard.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Announcement {
    /// 1-based; doubles as the keyboard shortcut digit.
    pub id: u8,
    pub icon: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

pub const ANNOUNCEMENTS: &[Announcement] = &[
    Announcement {
        id: 1,
        icon: "\u{1F686}",
        title: "Arrival",
        text: "Attention please. The train is arriving on platform number one. Please stand behind the yellow line.",
    },
    Announcement {
        id: 2,
        icon: "\u{1F6AA}",
        title: "Departure",
        text: "The train on platform number one is ready to depart. Please board now and mind the closing doors.",
    },
    Announcement {
        id: 3,
        icon: "\u{23F1}",
        title: "Delay",
        text: "We regret to inform you that the train is running late by approximately thirty minutes. We apologise for the inconvenience.",
    },
    Announcement {
        id: 4,
        icon: "\u{1F500}",
        title: "Platform change",
        text: "Attention please. There has been a platform change. The train will now arrive on platform number three.",
    },
    Announcement {
        id: 5,
        icon: "\u{1F9F3}",
        title: "Safety",
        text: "For your safety, please do not leave your luggage unattended and report any suspicious items to railway staff.",
    },
];

pub fn announcement(id: u8) -> Option<&'static Announcement> {
    ANNOUNCEMENTS.iter().find(|a| a.id == id)
}

/// Name suggested when saving generated audio.
pub fn download_filename(epoch_millis: u64) -> String {
    format!("train_announcement_{epoch_millis}.mp3")
}

/// Dashboard keyboard shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Announce(u8),
    Dismiss,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub meta: bool,
    pub alt: bool,
}

impl Modifiers {
    fn any(&self) -> bool {
        self.ctrl || self.meta || self.alt
    }
}

/// Maps a `KeyboardEvent.key` value to a shortcut.
pub fn shortcut_for_key(key: &str, modifiers: Modifiers) -> Option<Shortcut> {
    if key == "Escape" {
        return Some(Shortcut::Dismiss);
    }
    match key {
        "1" | "2" | "3" | "4" | "5" if !modifiers.any() => key.parse().ok().map(Shortcut::Announce),
        _ => None,
    }
}
