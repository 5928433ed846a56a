use sdl2::pixels::PixelFormatEnum;

use okto_core::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use okto_core::FrameBuffer;

const SCALE: usize = 10;

/// # Display
/// The machine's display is a 64x32 grid of black/white pixels, exported by
/// the core as a flat row-major array of 0/1 cells. `render` is only called
/// when the core reports that the frame buffer changed.
pub struct Display {
    canvas: sdl2::render::WindowCanvas,
    width: usize,
    height: usize,
}

impl Display {
    /// Creates a new display object bound to an sdl2 context.
    ///
    /// # Arguments
    /// * `sdl` an sdl2 context with which to draw
    pub fn new(sdl: &sdl2::Sdl) -> Self {
        let video_subsystem = sdl.video().unwrap();
        let window = video_subsystem
            .window(
                "okto",
                (DISPLAY_WIDTH * SCALE) as u32,
                (DISPLAY_HEIGHT * SCALE) as u32,
            )
            .position_centered()
            .opengl()
            .build()
            .unwrap();
        let canvas = window.into_canvas().build().unwrap();

        Display {
            canvas,
            width: DISPLAY_WIDTH,
            height: DISPLAY_HEIGHT,
        }
    }

    /// Formats a frame buffer for rendering as an SDL2 texture.
    ///
    /// An SDL2 RGB24 texture is a 1D array of ints representing concatenated
    /// rows of RGB pixels. The frame buffer is already flat and row-major, so
    /// each cell is triplicated into its RGB channels and scaled from a
    /// binary state to 0-255 intensity.
    ///
    /// # Arguments
    /// * `frame` a frame buffer exported by the core
    fn frame_to_sdl_texture(frame: &FrameBuffer) -> Vec<u8> {
        frame
            .iter()
            .flat_map(|cell| std::iter::repeat(cell).take(3))
            .map(|cell| cell * 255)
            .collect()
    }

    /// Formats the frame buffer as an SDL2 RGB24 texture and renders it.
    ///
    /// # Arguments
    /// * `frame` a frame buffer exported by the core
    pub fn render(&mut self, frame: &FrameBuffer) {
        let texture_creator = self.canvas.texture_creator();

        let mut texture = texture_creator
            .create_texture_streaming(
                PixelFormatEnum::RGB24,
                self.width as u32,
                self.height as u32,
            )
            .unwrap();

        texture
            .with_lock(None, |buffer: &mut [u8], _pitch: usize| {
                buffer.copy_from_slice(&Display::frame_to_sdl_texture(frame));
            })
            .unwrap();

        self.canvas.copy(&texture, None, None).unwrap();
        self.canvas.present()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use okto_core::constants::DISPLAY_SIZE;

    #[test]
    fn test_frame_to_sdl_texture() {
        let mut frame: FrameBuffer = [0; DISPLAY_SIZE];
        frame[1] = 1;
        frame[DISPLAY_WIDTH] = 1;
        let texture = Display::frame_to_sdl_texture(&frame);

        let mut expected: Vec<u8> = vec![0; DISPLAY_SIZE * 3];
        expected[3..6].copy_from_slice(&[255, 255, 255]);
        let row = DISPLAY_WIDTH * 3;
        expected[row..row + 3].copy_from_slice(&[255, 255, 255]);

        assert_eq!(texture, expected);
    }
}
