use super::*;

fn frame(v: u8) -> FrameRGBA {
    FrameRGBA {
        width: 1,
        height: 1,
        data: vec![v, v, v, 255],
        premultiplied: true,
    }
}

#[test]
fn in_memory_sink_keeps_push_order() {
    let mut sink = InMemorySink::new();
    sink.begin(SinkConfig {
        width: 1,
        height: 1,
        frame_count: 3,
    })
    .unwrap();
    for i in 0..3u8 {
        sink.push_frame(FrameIndex(u32::from(i)), frame(i)).unwrap();
    }
    sink.end().unwrap();

    assert_eq!(sink.config().unwrap().frame_count, 3);
    let frames = sink.into_frames();
    assert_eq!(frames.len(), 3);
    assert_eq!(frames[2].data[0], 2);
}

#[test]
fn in_memory_sink_rejects_out_of_order_frames() {
    let mut sink = InMemorySink::new();
    sink.begin(SinkConfig {
        width: 1,
        height: 1,
        frame_count: 2,
    })
    .unwrap();
    assert!(sink.push_frame(FrameIndex(1), frame(0)).is_err());
}

#[test]
fn begin_resets_previous_frames() {
    let cfg = SinkConfig {
        width: 1,
        height: 1,
        frame_count: 1,
    };
    let mut sink = InMemorySink::new();
    sink.begin(cfg).unwrap();
    sink.push_frame(FrameIndex(0), frame(9)).unwrap();
    sink.begin(cfg).unwrap();
    assert!(sink.frames().is_empty());
}
