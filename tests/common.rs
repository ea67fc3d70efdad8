#![cfg(feature = "std")]

use std::path::Path;

use csv::ReaderBuilder;
use stxframe::{
    avec::{Error, FrameDecoder, FromFrames},
    sans::{MAX_PAYLOAD, Phase},
};
use tinyvec::ArrayVec;

const PATH: &str = "fixtures/serial-capture.bin";

#[test]
fn decode_slice_capture() {
    let data = std::fs::read(PATH).unwrap();
    let mut validator = Validator::new(PATH);
    let frames = stxframe::avec::decode_slice(&data, &mut validator);
    validator.finish(frames);
}

#[test]
fn decode_reader_capture() {
    let mut file = std::fs::File::open(PATH).unwrap();
    let mut validator = Validator::new(PATH);
    let frames = stxframe::avec::decode_reader(&mut file, &mut validator).unwrap();
    validator.finish(frames);
}

#[test]
fn decode_reader_one_byte_at_a_time() {
    // A reader yielding single bytes, as a serial port with no buffering would.
    struct Trickle(std::vec::IntoIter<u8>);

    impl std::io::Read for Trickle {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            match (self.0.next(), buf.first_mut()) {
                (Some(b), Some(slot)) => {
                    *slot = b;
                    Ok(1)
                }
                _ => Ok(0),
            }
        }
    }

    let data = std::fs::read(PATH).unwrap();
    let mut reader = Trickle(data.into_iter());
    let mut validator = Validator::new(PATH);
    let frames = stxframe::avec::decode_reader(&mut reader, &mut validator).unwrap();
    validator.finish(frames);
}

#[test]
fn decode_capture_in_chunks() {
    let data = std::fs::read(PATH).unwrap();
    let mut validator = Validator::new(PATH);
    let mut decoder = FrameDecoder::new();

    let frames: usize = data
        .chunks(5)
        .map(|chunk| decoder.decode_slice(chunk, &mut validator))
        .sum();

    validator.finish(frames);

    let stats = decoder.stats();
    assert_eq!(stats.frames, 6);
    assert_eq!(stats.discarded, 8);
    assert_eq!(stats.out_of_range, 1);
    assert_eq!(stats.checksum_mismatches, 1);
    assert_eq!(stats.bad_end_markers, 1);

    // The capture ends partway through a frame.
    assert_eq!(decoder.phase(), Phase::AccumulatingPayload);
}

struct Validator {
    expected: Vec<Vec<u8>>,
    frames: Vec<ArrayVec<[u8; MAX_PAYLOAD]>>,
    rejections: Vec<Error>,
}

impl Validator {
    fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().with_extension("csv");

        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .has_headers(false)
            .from_path(path)
            .unwrap();

        let expected = reader
            .records()
            .map(|r| {
                let mut fields: Vec<u8> = r.unwrap().iter().map(|f| f.parse().unwrap()).collect();
                let len = fields.remove(0);
                assert_eq!(usize::from(len), fields.len());
                fields
            })
            .collect();

        Self {
            expected,
            frames: vec![],
            rejections: vec![],
        }
    }

    fn finish(self, frames: usize) {
        assert_eq!(frames, self.expected.len());
        assert_eq!(self.frames.len(), self.expected.len());

        for (found, expected) in self.frames.iter().zip(&self.expected) {
            assert_eq!(&found[..], &expected[..]);
        }

        assert_eq!(
            self.rejections,
            [
                Error::Length(stxframe::sans::header::LengthError::OutOfRange {
                    found: 11,
                    capacity: MAX_PAYLOAD,
                }),
                Error::ChecksumMismatch {
                    found: 0x43,
                    calculated: 0x42,
                },
                Error::EndMarker(0x04),
            ]
        );
    }
}

impl FromFrames for Validator {
    fn add_frame(&mut self, payload: &[u8]) {
        self.frames.push(payload.iter().copied().collect());
    }

    fn add_rejection(&mut self, error: Error) {
        self.rejections.push(error);
    }
}
