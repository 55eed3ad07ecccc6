//! "Short video" cards: text slides shown on a timeline

use serde::{Deserialize, Serialize};

/// Playback advances by this many seconds per tick
pub const TICK_SEC: f64 = 0.1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    pub t: f64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Short {
    pub id: String,
    pub title: String,
    pub duration_sec: f64,
    pub slides: Vec<Slide>,
}

#[derive(Debug, Clone)]
pub struct ShortPlayer {
    short: Short,
    current_time: f64,
    playing: bool,
    liked: bool,
}

impl ShortPlayer {
    pub fn new(short: Short) -> Self {
        Self {
            short,
            current_time: 0.0,
            playing: false,
            liked: false,
        }
    }

    pub fn short(&self) -> &Short {
        &self.short
    }

    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_finished(&self) -> bool {
        self.current_time >= self.short.duration_sec
    }

    /// Advance one tick; playback stops at the end of the card
    pub fn tick(&mut self) {
        if !self.playing {
            return;
        }
        let next = self.current_time + TICK_SEC;
        if next >= self.short.duration_sec {
            self.current_time = self.short.duration_sec;
            self.playing = false;
        } else {
            self.current_time = next;
        }
    }

    /// Index of the slide on screen: the last one already started
    pub fn current_slide_index(&self) -> usize {
        let slides = &self.short.slides;
        slides
            .iter()
            .enumerate()
            .position(|(i, slide)| {
                self.current_time >= slide.t
                    && slides.get(i + 1).map_or(true, |next| self.current_time < next.t)
            })
            .unwrap_or(0)
    }

    pub fn current_slide(&self) -> Option<&Slide> {
        self.short.slides.get(self.current_slide_index())
    }

    /// Play or pause; playing a finished card starts it over
    pub fn toggle_play(&mut self) {
        if self.is_finished() {
            self.current_time = 0.0;
        }
        self.playing = !self.playing;
    }

    pub fn replay(&mut self) {
        self.current_time = 0.0;
        self.playing = true;
    }

    pub fn toggle_like(&mut self) -> bool {
        self.liked = !self.liked;
        self.liked
    }

    pub fn progress_percent(&self) -> f64 {
        if self.short.duration_sec <= 0.0 {
            return 100.0;
        }
        (self.current_time / self.short.duration_sec) * 100.0
    }
}
