mod write;

pub(crate) use write::RgbWriter;

pub(crate) trait RgbSrc {
    /// Fill two packed RGB rows, `y` and `y + 1`
    fn read(&mut self, y: usize, rgb0: &mut [u8], rgb1: &mut [u8]);
}
