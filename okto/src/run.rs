use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use log::info;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use okto_core::constants::TIMER_HZ;
use okto_core::{Chip8, Config, Error};
use okto_display::Display;

use crate::keymap::keymap;
use crate::tone::Tone;

const NANOS_PER_SECOND: u32 = 1_000_000_000;

pub fn run(rom: PathBuf, config: Config) -> Result<(), Error> {
    let mut chip8 = Chip8::new(config);

    // Load ROM before bringing up any windowing
    let file = File::open(rom)?;
    let mut reader = BufReader::new(file);
    let size = chip8.load_rom(&mut reader)?;
    info!("loaded a {} byte ROM", size);

    // Get SDL2 context
    let sdl: sdl2::Sdl = sdl2::init().unwrap();
    let mut display: Display = Display::new(&sdl);
    let mut events = sdl.event_pump().unwrap();
    let mut tone = Tone::new();

    // The timers are defined to run at 60Hz, so that is the tick cadence
    let tick_time: Duration = Duration::new(0, NANOS_PER_SECOND / TIMER_HZ);
    let mut last_tick: Instant = Instant::now();

    'event: loop {
        // If the core reports a changed frame, render it
        if let Some(frame) = chip8.take_frame() {
            display.render(frame);
        }

        // Handle input
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. } => break 'event,
                Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'event,
                Event::KeyDown {
                    keycode: Some(key), ..
                } => {
                    if let Some(kc) = keymap(key) {
                        chip8.key_press(kc);
                    }
                }
                Event::KeyUp {
                    keycode: Some(key), ..
                } => {
                    if let Some(kc) = keymap(key) {
                        chip8.key_release(kc);
                    }
                }
                _ => continue,
            };
        }

        // Advance the machine one tick and sync the audio cue
        chip8.tick()?;
        tone.set(chip8.tone_active());

        // Sleep out the remainder of the tick
        let current_time = Instant::now();
        let elapsed_tick_time = current_time - last_tick;
        if tick_time > elapsed_tick_time {
            std::thread::sleep(tick_time - elapsed_tick_time);
        }
        last_tick = current_time;
    }

    tone.set(false);
    Ok(())
}
