//! Minimal Motion-JPEG AVI (RIFF) writer.
//!
//! Layout: `RIFF AVI ` > `LIST hdrl` (`avih`, `LIST strl` with `strh`/`strf`)
//! > `LIST movi` (`00dc` chunks) > `idx1`. Header sizes and frame counts are
//! written as placeholders and patched by [`AviWriter::finish`].

use std::fs::File;
use std::io::{self, BufWriter, Read, Seek, SeekFrom, Write};
use std::path::Path;

const AVIF_HASINDEX: u32 = 0x10;
const AVIIF_KEYFRAME: u32 = 0x10;

const RIFF_SIZE_OFFSET: u64 = 4;
const AVIH_MAX_BYTES_OFFSET: u64 = 36;
const AVIH_TOTAL_FRAMES_OFFSET: u64 = 48;
const AVIH_BUFFER_OFFSET: u64 = 60;
const STRH_LENGTH_OFFSET: u64 = 140;
const STRH_BUFFER_OFFSET: u64 = 144;
const MOVI_SIZE_OFFSET: u64 = 216;
const MOVI_FOURCC_OFFSET: u64 = 220;
const HEADER_LEN: usize = 224;

pub struct AviWriter<W: Write + Seek> {
    inner: W,
    fps: u32,
    index: Vec<(u32, u32)>,
    max_frame_len: u32,
    position: u64,
}

impl AviWriter<BufWriter<File>> {
    pub fn create(path: &Path, width: u32, height: u32, fps: u32) -> io::Result<Self> {
        let file = File::create(path)?;
        Self::new(BufWriter::new(file), width, height, fps)
    }
}

impl<W: Write + Seek> AviWriter<W> {
    pub fn new(mut inner: W, width: u32, height: u32, fps: u32) -> io::Result<Self> {
        if fps == 0 {
            return Err(io::Error::new(io::ErrorKind::InvalidInput, "fps must be positive"));
        }

        let header = header_bytes(width, height, fps);
        inner.write_all(&header)?;

        Ok(Self {
            inner,
            fps,
            index: Vec::new(),
            max_frame_len: 0,
            position: header.len() as u64,
        })
    }

    pub fn frame_count(&self) -> u32 {
        self.index.len() as u32
    }

    pub fn write_frame(&mut self, jpeg: &[u8]) -> io::Result<()> {
        let len = u32::try_from(jpeg.len())
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "frame too large"))?;

        let chunk_offset = (self.position - MOVI_FOURCC_OFFSET) as u32;
        self.inner.write_all(b"00dc")?;
        self.inner.write_all(&len.to_le_bytes())?;
        self.inner.write_all(jpeg)?;
        self.position += 8 + len as u64;
        if len % 2 == 1 {
            self.inner.write_all(&[0])?;
            self.position += 1;
        }

        self.index.push((chunk_offset, len));
        self.max_frame_len = self.max_frame_len.max(len);
        Ok(())
    }

    /// Writes the index, patches every size field and returns the sink.
    pub fn finish(mut self) -> io::Result<W> {
        let movi_end = self.position;

        self.inner.write_all(b"idx1")?;
        self.inner.write_all(&((self.index.len() * 16) as u32).to_le_bytes())?;
        for (offset, len) in &self.index {
            self.inner.write_all(b"00dc")?;
            self.inner.write_all(&AVIIF_KEYFRAME.to_le_bytes())?;
            self.inner.write_all(&offset.to_le_bytes())?;
            self.inner.write_all(&len.to_le_bytes())?;
        }
        let file_end = movi_end + 8 + self.index.len() as u64 * 16;

        let frames = self.index.len() as u32;
        let buffer = self.max_frame_len + 8;
        let max_bytes_per_sec = self.max_frame_len.saturating_mul(self.fps);

        self.patch(RIFF_SIZE_OFFSET, (file_end - 8) as u32)?;
        self.patch(AVIH_MAX_BYTES_OFFSET, max_bytes_per_sec)?;
        self.patch(AVIH_TOTAL_FRAMES_OFFSET, frames)?;
        self.patch(AVIH_BUFFER_OFFSET, buffer)?;
        self.patch(STRH_LENGTH_OFFSET, frames)?;
        self.patch(STRH_BUFFER_OFFSET, buffer)?;
        self.patch(MOVI_SIZE_OFFSET, (movi_end - MOVI_FOURCC_OFFSET) as u32)?;

        self.inner.seek(SeekFrom::Start(file_end))?;
        self.inner.flush()?;
        Ok(self.inner)
    }

    fn patch(&mut self, offset: u64, value: u32) -> io::Result<()> {
        self.inner.seek(SeekFrom::Start(offset))?;
        self.inner.write_all(&value.to_le_bytes())
    }
}

/// Total frame count from the main header of an AVI file.
pub fn read_frame_count(path: &Path) -> io::Result<u32> {
    let mut file = File::open(path)?;
    let mut head = [0u8; 52];
    file.read_exact(&mut head)?;

    if &head[0..4] != b"RIFF" || &head[8..12] != b"AVI " || &head[24..28] != b"avih" {
        return Err(io::Error::new(io::ErrorKind::InvalidData, "not an AVI file"));
    }

    Ok(u32::from_le_bytes([head[48], head[49], head[50], head[51]]))
}

/// Payloads of the `00dc` chunks in stream order.
pub fn read_frames(path: &Path) -> io::Result<Vec<Vec<u8>>> {
    let bytes = std::fs::read(path)?;
    if bytes.len() < HEADER_LEN || &bytes[MOVI_FOURCC_OFFSET as usize..HEADER_LEN] != b"movi" {
        return Err(io::Error::new(io::ErrorKind::InvalidData, "not an MJPEG AVI file"));
    }

    let mut frames = Vec::new();
    let mut cursor = HEADER_LEN;
    while cursor + 8 <= bytes.len() {
        let fourcc = &bytes[cursor..cursor + 4];
        if fourcc == b"idx1" {
            break;
        }
        let len = u32::from_le_bytes([
            bytes[cursor + 4],
            bytes[cursor + 5],
            bytes[cursor + 6],
            bytes[cursor + 7],
        ]) as usize;
        let start = cursor + 8;
        let end = start
            .checked_add(len)
            .filter(|end| *end <= bytes.len())
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "truncated chunk"))?;
        if fourcc == b"00dc" {
            frames.push(bytes[start..end].to_vec());
        }
        cursor = end + len % 2;
    }
    Ok(frames)
}

fn header_bytes(width: u32, height: u32, fps: u32) -> Vec<u8> {
    let mut h = Vec::with_capacity(HEADER_LEN);
    let u32le = |h: &mut Vec<u8>, v: u32| h.extend_from_slice(&v.to_le_bytes());
    let u16le = |h: &mut Vec<u8>, v: u16| h.extend_from_slice(&v.to_le_bytes());

    h.extend_from_slice(b"RIFF");
    u32le(&mut h, 0);
    h.extend_from_slice(b"AVI ");

    h.extend_from_slice(b"LIST");
    u32le(&mut h, 192);
    h.extend_from_slice(b"hdrl");

    h.extend_from_slice(b"avih");
    u32le(&mut h, 56);
    u32le(&mut h, 1_000_000 / fps);
    u32le(&mut h, 0); // max bytes/sec
    u32le(&mut h, 0); // padding granularity
    u32le(&mut h, AVIF_HASINDEX);
    u32le(&mut h, 0); // total frames
    u32le(&mut h, 0); // initial frames
    u32le(&mut h, 1); // streams
    u32le(&mut h, 0); // suggested buffer
    u32le(&mut h, width);
    u32le(&mut h, height);
    for _ in 0..4 {
        u32le(&mut h, 0);
    }

    h.extend_from_slice(b"LIST");
    u32le(&mut h, 116);
    h.extend_from_slice(b"strl");

    h.extend_from_slice(b"strh");
    u32le(&mut h, 56);
    h.extend_from_slice(b"vids");
    h.extend_from_slice(b"MJPG");
    u32le(&mut h, 0); // flags
    u16le(&mut h, 0); // priority
    u16le(&mut h, 0); // language
    u32le(&mut h, 0); // initial frames
    u32le(&mut h, 1); // scale
    u32le(&mut h, fps); // rate
    u32le(&mut h, 0); // start
    u32le(&mut h, 0); // length
    u32le(&mut h, 0); // suggested buffer
    u32le(&mut h, u32::MAX); // quality
    u32le(&mut h, 0); // sample size
    u16le(&mut h, 0);
    u16le(&mut h, 0);
    u16le(&mut h, width.min(u16::MAX as u32) as u16);
    u16le(&mut h, height.min(u16::MAX as u32) as u16);

    h.extend_from_slice(b"strf");
    u32le(&mut h, 40);
    u32le(&mut h, 40);
    u32le(&mut h, width);
    u32le(&mut h, height);
    u16le(&mut h, 1); // planes
    u16le(&mut h, 24); // bit count
    h.extend_from_slice(b"MJPG");
    u32le(&mut h, width.saturating_mul(height).saturating_mul(3));
    for _ in 0..4 {
        u32le(&mut h, 0);
    }

    h.extend_from_slice(b"LIST");
    u32le(&mut h, 0); // movi size
    h.extend_from_slice(b"movi");

    debug_assert_eq!(h.len(), HEADER_LEN);
    h
}
