//! Validates the full sheet-to-icons pipeline: segmentation geometry,
//! collision-safe index allocation, and exact crop persistence

use iconcarve::io::index::next_icon_index;
use iconcarve::io::writer::write_icons;
use iconcarve::segment::binarize::foreground_mask;
use iconcarve::segment::grid::{GridCell, assemble_grid};
use iconcarve::segment::profile::{col_profile, row_profile};
use iconcarve::segment::runs::find_runs;
use image::{DynamicImage, GrayImage, Luma};
use std::ops::Range;

const MIN_RUN_LENGTH: usize = 20;
const THRESHOLD: u8 = 128;

/// Build a white sheet with black rectangles at every (row span × column span)
fn synthetic_sheet(width: u32, height: u32, rows: &[Range<u32>], cols: &[Range<u32>]) -> DynamicImage {
    let mut img = GrayImage::from_pixel(width, height, Luma([255]));
    for row in rows {
        for col in cols {
            for y in row.clone() {
                for x in col.clone() {
                    img.put_pixel(x, y, Luma([0]));
                }
            }
        }
    }
    DynamicImage::ImageLuma8(img)
}

/// Run the segmentation stages on a sheet and return the detected cells
fn segment_cells(sheet: &DynamicImage) -> Vec<GridCell> {
    let mask = foreground_mask(sheet, THRESHOLD);
    let row_runs = find_runs(row_profile(&mask).iter().copied(), MIN_RUN_LENGTH);
    let col_runs = find_runs(col_profile(&mask).iter().copied(), MIN_RUN_LENGTH);
    assemble_grid(&row_runs, &col_runs)
}

#[test]
fn test_detects_two_by_two_grid() {
    let sheet = synthetic_sheet(200, 200, &[20..60, 120..165], &[30..75, 130..172]);

    let cells = segment_cells(&sheet);

    assert_eq!(cells.len(), 4);
    // Row-major: top-left, top-right, bottom-left, bottom-right
    assert_eq!(
        cells,
        vec![
            GridCell { left: 30, top: 20, right: 75, bottom: 60 },
            GridCell { left: 130, top: 20, right: 172, bottom: 60 },
            GridCell { left: 30, top: 120, right: 75, bottom: 165 },
            GridCell { left: 130, top: 120, right: 172, bottom: 165 },
        ]
    );

    // Determinism: a second pass over the same sheet yields the same cells
    assert_eq!(segment_cells(&sheet), cells);
}

#[test]
fn test_blank_sheet_produces_no_icons() {
    let sheet = synthetic_sheet(150, 150, &[], &[]);
    let cells = segment_cells(&sheet);
    assert!(cells.is_empty());

    let dir = tempfile::tempdir().unwrap();
    let written = write_icons(&sheet, &cells, dir.path()).unwrap();
    assert!(written.is_empty());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_content_below_minimum_run_length_is_ignored() {
    // 15-pixel blobs never reach the 20-pixel run minimum
    let sheet = synthetic_sheet(100, 100, &[10..25, 50..65], &[10..25, 50..65]);
    assert!(segment_cells(&sheet).is_empty());
}

#[test]
fn test_indices_are_monotonic_across_a_batch() {
    let sheet = synthetic_sheet(200, 200, &[20..60, 120..160], &[20..60, 120..160]);
    let cells = segment_cells(&sheet);
    assert_eq!(cells.len(), 4);

    let dir = tempfile::tempdir().unwrap();
    let first = write_icons(&sheet, &cells, dir.path()).unwrap();
    let second = write_icons(&sheet, &cells, dir.path()).unwrap();

    let first_indices: Vec<u64> = first.iter().map(|(_, i)| *i).collect();
    let second_indices: Vec<u64> = second.iter().map(|(_, i)| *i).collect();
    assert_eq!(first_indices, vec![1, 2, 3, 4]);
    assert_eq!(second_indices, vec![5, 6, 7, 8]);

    for (path, _) in first.iter().chain(second.iter()) {
        assert!(path.exists(), "missing icon file {}", path.display());
    }
}

#[test]
fn test_allocation_resumes_past_existing_icons() {
    let dir = tempfile::tempdir().unwrap();
    let marker = GrayImage::from_pixel(3, 3, Luma([7]));
    marker.save(dir.path().join("icon_00000001.png")).unwrap();

    assert_eq!(next_icon_index(dir.path()).unwrap(), 2);

    let sheet = synthetic_sheet(100, 100, &[10..40], &[10..40]);
    let cells = segment_cells(&sheet);
    assert_eq!(cells.len(), 1);

    let written = write_icons(&sheet, &cells, dir.path()).unwrap();
    assert_eq!(
        written.first().map(|(p, i)| (p.clone(), *i)),
        Some((dir.path().join("icon_00000002.png"), 2))
    );

    // The pre-existing icon is untouched
    let reread = image::open(dir.path().join("icon_00000001.png")).unwrap().to_luma8();
    assert_eq!(reread.dimensions(), (3, 3));
    assert_eq!(*reread.get_pixel(0, 0), Luma([7]));
}

#[test]
fn test_malformed_names_do_not_contribute_to_the_watermark() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("icon_banana.png"), b"not an icon").unwrap();
    std::fs::write(dir.path().join("notes.txt"), b"unrelated").unwrap();
    assert_eq!(next_icon_index(dir.path()).unwrap(), 1);

    let marker = GrayImage::from_pixel(1, 1, Luma([0]));
    marker.save(dir.path().join("icon_00000041.png")).unwrap();
    assert_eq!(next_icon_index(dir.path()).unwrap(), 42);
}

#[test]
fn test_empty_directory_starts_at_one() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(next_icon_index(dir.path()).unwrap(), 1);
}

#[test]
fn test_crops_round_trip_exactly() {
    // Checkerboard-graded content so every pixel in the cell is distinctive
    let mut img = GrayImage::from_pixel(120, 120, Luma([255]));
    for y in 30..80 {
        for x in 40..95 {
            img.put_pixel(x, y, Luma([((x * 3 + y * 5) % 200) as u8]));
        }
    }
    let sheet = DynamicImage::ImageLuma8(img);

    let cell = GridCell { left: 40, top: 30, right: 95, bottom: 80 };
    let dir = tempfile::tempdir().unwrap();
    let written = write_icons(&sheet, &[cell], dir.path()).unwrap();
    let (path, _) = written.first().unwrap();

    let icon = image::open(path).unwrap().to_luma8();
    assert_eq!(icon.dimensions(), (cell.width(), cell.height()));

    let source = sheet.to_luma8();
    for y in 0..cell.height() {
        for x in 0..cell.width() {
            assert_eq!(
                icon.get_pixel(x, y),
                source.get_pixel(cell.left + x, cell.top + y),
                "pixel mismatch at ({x}, {y})"
            );
        }
    }
}

#[test]
fn test_output_directory_is_created_on_demand() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("icons").join("out");

    let sheet = synthetic_sheet(100, 100, &[10..40], &[10..40]);
    let cells = segment_cells(&sheet);
    let written = write_icons(&sheet, &cells, &nested).unwrap();

    assert_eq!(written.len(), 1);
    assert!(nested.join("icon_00000001.png").exists());
}
