use super::*;
use crate::foundation::core::{EventDataPoint, TimeRange};
use crate::foundation::error::PerspectiveError;

#[derive(Default)]
struct Recorder {
    seen: std::rc::Rc<std::cell::RefCell<Vec<EventDataPoint>>>,
}

impl Visualizer for Recorder {
    fn record(&mut self, e: EventDataPoint) {
        self.seen.borrow_mut().push(e);
    }

    fn render(self: Box<Self>) -> Canvas {
        Canvas::new(2, 2)
    }
}

fn rec(id: i32, start: i32, status: i8) -> EventData {
    EventData {
        id,
        event_type: 1,
        start,
        run: 5,
        status,
        region: 0,
        progress: 100,
    }
}

#[test]
fn skips_filtered_and_in_progress_records() {
    let recorder = Recorder::default();
    let seen = recorder.seen.clone();
    let filter = EventFilter::new(TimeRange::new(10, 100).unwrap());
    let records = vec![
        Ok(rec(1, 5, 0)),
        Ok(rec(2, 10, 0)),
        Ok(rec(3, 20, -1)),
        Ok(rec(4, 30, 2)),
        Ok(rec(5, 200, 0)),
    ];

    let (canvas, stats) = render_events(records, &filter, Box::new(recorder)).unwrap();
    assert_eq!(canvas.width(), 2);
    assert_eq!(
        *seen.borrow(),
        vec![EventDataPoint::new(10, 5, 0), EventDataPoint::new(30, 5, 2)]
    );
    assert_eq!(
        stats,
        RenderStats {
            records_read: 5,
            events_recorded: 2,
            out_of_order: 0,
        }
    );
}

#[test]
fn counts_out_of_order_starts() {
    let filter = EventFilter::new(TimeRange::new(0, 100).unwrap());
    let records = [30, 10, 20, 40].map(|s| Ok(rec(s, s, 0)));
    let (_, stats) = render_events(records, &filter, Box::new(Recorder::default())).unwrap();
    assert_eq!(stats.out_of_order, 2);
}

#[test]
fn decode_error_aborts() {
    let filter = EventFilter::new(TimeRange::new(0, 100).unwrap());
    let records = vec![
        Ok(rec(1, 1, 0)),
        Err(PerspectiveError::decode("bad")),
        Ok(rec(2, 2, 0)),
    ];
    let err = render_events(records, &filter, Box::new(Recorder::default())).unwrap_err();
    assert!(matches!(err, PerspectiveError::Decode(_)));
}

#[test]
fn encoded_png_decodes_to_canvas_pixels() {
    let mut canvas = Canvas::new(3, 2);
    canvas.set_pixel(1, 1, crate::canvas::surface::Rgba8::opaque([10, 20, 30]));
    let expected = canvas.to_rgba8_bytes();

    let bytes = encode_png(canvas).unwrap();
    let img = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (3, 2));
    assert_eq!(img.into_raw(), expected);
}
