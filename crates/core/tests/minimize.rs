//! End-to-end pipeline tests against a synthesized asset directory.

use std::fs::{read, write};

use icontrim_core::{Artifacts, MinimizeOptions, run};
use read_fonts::{FontRef, TableProvider};
use tempfile::TempDir;
use write_fonts::{
    FontBuilder,
    tables::{
        cmap::Cmap,
        glyf::{Bbox, Contour, GlyfLocaBuilder, Glyph, SimpleGlyph},
        head::Head,
        hhea::Hhea,
        hmtx::{Hmtx, LongMetric},
        maxp::Maxp,
        post::Post,
    },
};

/// Build a minimal static TrueType font mapping the given codepoints, with
/// glyph 0 as .notdef.
fn make_icon_font(codepoints: &[u32]) -> Vec<u8> {
    let num_glyphs = codepoints.len() as u16 + 1;

    let mut glyf_builder = GlyfLocaBuilder::new();
    for _ in 0..num_glyphs {
        let contour: Contour = vec![
            read_fonts::tables::glyf::CurvePoint { x: 50, y: 50, on_curve: true },
            read_fonts::tables::glyf::CurvePoint { x: 450, y: 50, on_curve: true },
            read_fonts::tables::glyf::CurvePoint { x: 450, y: 650, on_curve: true },
            read_fonts::tables::glyf::CurvePoint { x: 50, y: 650, on_curve: true },
        ]
        .into();
        let simple = SimpleGlyph {
            bbox: Bbox { x_min: 50, y_min: 50, x_max: 450, y_max: 650 },
            contours: vec![contour],
            instructions: vec![],
        };
        glyf_builder.add_glyph(&Glyph::Simple(simple)).unwrap();
    }
    let (glyf, loca, loca_format) = glyf_builder.build();

    let mappings: Vec<(char, read_fonts::types::GlyphId)> = codepoints
        .iter()
        .enumerate()
        .map(|(i, cp)| {
            (char::from_u32(*cp).unwrap(), read_fonts::types::GlyphId::new(i as u32 + 1))
        })
        .collect();
    let cmap = Cmap::from_mappings(mappings).unwrap();

    let head = Head {
        font_revision: font_types::Fixed::from_f64(1.0),
        checksum_adjustment: 0,
        magic_number: 0x5F0F3CF5,
        flags: write_fonts::tables::head::Flags::empty(),
        units_per_em: 1000,
        created: font_types::LongDateTime::new(0),
        modified: font_types::LongDateTime::new(0),
        x_min: 50,
        y_min: 50,
        x_max: 450,
        y_max: 650,
        mac_style: write_fonts::tables::head::MacStyle::empty(),
        lowest_rec_ppem: 8,
        font_direction_hint: 2,
        index_to_loc_format: match loca_format {
            write_fonts::tables::loca::LocaFormat::Short => 0,
            write_fonts::tables::loca::LocaFormat::Long => 1,
        },
    };

    let hhea = Hhea {
        ascender: font_types::FWord::new(700),
        descender: font_types::FWord::new(-200),
        line_gap: font_types::FWord::new(0),
        advance_width_max: font_types::UfWord::new(500),
        min_left_side_bearing: font_types::FWord::new(0),
        min_right_side_bearing: font_types::FWord::new(0),
        x_max_extent: font_types::FWord::new(500),
        caret_slope_rise: 1,
        caret_slope_run: 0,
        caret_offset: 0,
        number_of_h_metrics: num_glyphs,
    };

    let hmtx = Hmtx {
        h_metrics: (0..num_glyphs).map(|_| LongMetric { advance: 500, side_bearing: 0 }).collect(),
        left_side_bearings: vec![],
    };

    let maxp = Maxp {
        num_glyphs,
        max_points: Some(4),
        max_contours: Some(1),
        max_composite_points: Some(0),
        max_composite_contours: Some(0),
        max_zones: Some(1),
        max_twilight_points: Some(0),
        max_storage: Some(0),
        max_function_defs: Some(0),
        max_instruction_defs: Some(0),
        max_stack_elements: Some(0),
        max_size_of_instructions: Some(0),
        max_component_elements: Some(0),
        max_component_depth: Some(0),
    };

    let post = Post {
        version: font_types::Version16Dot16::VERSION_3_0,
        italic_angle: font_types::Fixed::from_f64(0.0),
        underline_position: font_types::FWord::new(-100),
        underline_thickness: font_types::FWord::new(50),
        is_fixed_pitch: 0,
        min_mem_type42: 0,
        max_mem_type42: 0,
        min_mem_type1: 0,
        max_mem_type1: 0,
        num_glyphs: Some(num_glyphs),
        glyph_name_index: None,
        string_data: None,
    };

    let mut builder = FontBuilder::new();
    builder.add_table(&head).unwrap();
    builder.add_table(&hhea).unwrap();
    builder.add_table(&hmtx).unwrap();
    builder.add_table(&maxp).unwrap();
    builder.add_table(&cmap).unwrap();
    builder.add_table(&post).unwrap();
    builder.add_table(&glyf).unwrap();
    builder.add_table(&loca).unwrap();
    builder.build()
}

/// Asset directory with a stylesheet corpus and source fonts for the
/// github (brands, U+F09B) + house (solid, U+F015) scenario.
fn scenario_assets() -> TempDir {
    let dir = TempDir::new().unwrap();

    write(
        dir.path().join("brands.css"),
        ".fa-github {\n  --fa: \"\\f09b\";\n}\n.fa-rust {\n  --fa: \"\\e07a\";\n}\n",
    )
    .unwrap();
    write(
        dir.path().join("fontawesome.css"),
        ".fa-house {\n  --fa: \"\\f015\";\n}\n.fa-bell {\n  --fa: \"\\f0f3\";\n}\n",
    )
    .unwrap();

    write(dir.path().join("fa-brands-400.woff2"), make_icon_font(&[0xF09B, 0xE07A])).unwrap();
    write(dir.path().join("fa-solid-900.woff2"), make_icon_font(&[0xF015, 0xF0F3])).unwrap();

    dir
}

fn options(dir: &TempDir, spec: &str, artifacts: Artifacts) -> MinimizeOptions {
    let spec_path = dir.path().join("icons.spec");
    write(&spec_path, spec).unwrap();

    MinimizeOptions {
        spec_path,
        assets_dir: dir.path().to_path_buf(),
        output_prefix: Some(dir.path().join("minimal").to_string_lossy().into_owned()),
        font_url: None,
        artifacts,
    }
}

#[test]
fn test_github_plus_house_produces_merged_font_and_css() {
    let dir = scenario_assets();
    let opts = options(&dir, "fa-brands fa-github\nfa-solid fa-house\n", Artifacts::Both);

    run(&opts).unwrap();

    let font_data = read(dir.path().join("minimal.woff2")).unwrap();
    let font = FontRef::new(&font_data).unwrap();
    let cmap = font.cmap().unwrap();
    assert!(cmap.map_codepoint(0xF09Bu32).is_some(), "github glyph missing");
    assert!(cmap.map_codepoint(0xF015u32).is_some(), "house glyph missing");
    // Unrequested icons are gone
    assert!(cmap.map_codepoint(0xE07Au32).is_none());
    assert!(cmap.map_codepoint(0xF0F3u32).is_none());

    let css = std::fs::read_to_string(dir.path().join("minimal.css")).unwrap();
    assert!(css.contains(".fa-github {\n  --fa: \"\\f09b\";\n}"));
    assert!(css.contains(".fa-house {\n  --fa: \"\\f015\";\n}"));
    assert!(css.contains("/* Brand icon family */"));
    assert!(css.contains("/* Solid icon family */"));
    // Default URL is the output prefix plus the font extension
    assert!(css.contains("minimal.woff2\");"));
}

#[test]
fn test_single_family_subsets_without_merge() {
    let dir = scenario_assets();
    let opts = options(&dir, "fa-solid fa-house\nfa-solid fa-bell\n", Artifacts::Both);

    run(&opts).unwrap();

    let font_data = read(dir.path().join("minimal.woff2")).unwrap();
    let font = FontRef::new(&font_data).unwrap();
    let cmap = font.cmap().unwrap();
    assert!(cmap.map_codepoint(0xF015u32).is_some());
    assert!(cmap.map_codepoint(0xF0F3u32).is_some());
}

#[test]
fn test_full_coverage_source_skips_missing_family_font() {
    let dir = TempDir::new().unwrap();
    // house resolves as regular via fontawesome.css, but only the solid
    // source font exists and it covers every requested codepoint
    write(
        dir.path().join("fontawesome.css"),
        ".fa-house {\n  --fa: \"\\f015\";\n}\n.fa-bell {\n  --fa: \"\\f0f3\";\n}\n",
    )
    .unwrap();
    write(dir.path().join("fa-solid-900.woff2"), make_icon_font(&[0xF015, 0xF0F3])).unwrap();

    let opts = options(&dir, "fa-regular fa-house\nfa-solid fa-bell\n", Artifacts::FontOnly);
    run(&opts).unwrap();

    let font_data = read(dir.path().join("minimal.woff2")).unwrap();
    let cmap = FontRef::new(&font_data).unwrap().cmap().unwrap();
    assert!(cmap.map_codepoint(0xF015u32).is_some());
    assert!(cmap.map_codepoint(0xF0F3u32).is_some());
}

#[test]
fn test_css_only_needs_no_source_fonts() {
    let dir = TempDir::new().unwrap();
    write(dir.path().join("brands.css"), ".fa-github {\n  --fa: \"\\f09b\";\n}\n").unwrap();

    let opts = options(&dir, "fa-brands fa-github\n", Artifacts::CssOnly);
    run(&opts).unwrap();

    assert!(dir.path().join("minimal.css").exists());
    assert!(!dir.path().join("minimal.woff2").exists());
}

#[test]
fn test_missing_icons_fail_without_writing_outputs() {
    let dir = scenario_assets();
    let opts = options(&dir, "fa-brands fa-github\nfa-solid fa-no-such-icon\n", Artifacts::Both);

    assert!(run(&opts).is_err());
    assert!(!dir.path().join("minimal.css").exists());
    assert!(!dir.path().join("minimal.woff2").exists());
}

#[test]
fn test_no_source_font_at_all_is_an_error() {
    let dir = TempDir::new().unwrap();
    write(dir.path().join("brands.css"), ".fa-github {\n  --fa: \"\\f09b\";\n}\n").unwrap();
    write(dir.path().join("fontawesome.css"), ".fa-house {\n  --fa: \"\\f015\";\n}\n").unwrap();

    let opts = options(&dir, "fa-brands fa-github\nfa-solid fa-house\n", Artifacts::FontOnly);
    let err = run(&opts).unwrap_err();
    assert!(err.to_string().contains("No suitable source font"));
}

#[test]
fn test_output_prefix_with_directory_component() {
    let dir = scenario_assets();
    let spec_path = dir.path().join("icons.spec");
    write(&spec_path, "fa-brands fa-github\n").unwrap();

    let opts = MinimizeOptions {
        spec_path,
        assets_dir: dir.path().to_path_buf(),
        output_prefix: Some(dir.path().join("dist/out/minimal").to_string_lossy().into_owned()),
        font_url: None,
        artifacts: Artifacts::Both,
    };
    run(&opts).unwrap();

    assert!(dir.path().join("dist/out/minimal.css").exists());
    assert!(dir.path().join("dist/out/minimal.woff2").exists());
}

#[test]
fn test_missing_spec_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let opts = MinimizeOptions {
        spec_path: dir.path().join("no-such.spec"),
        assets_dir: dir.path().to_path_buf(),
        output_prefix: None,
        font_url: None,
        artifacts: Artifacts::Both,
    };

    let err = run(&opts).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("Failed to read spec file"));
    assert!(message.contains("no-such.spec"));
}

#[test]
fn test_spec_error_carries_line_number() {
    let dir = scenario_assets();
    let opts = options(&dir, "fa-brands fa-github\nbogus-line\n", Artifacts::Both);

    let err = run(&opts).unwrap_err();
    assert!(err.to_string().contains("line 2"));
}
