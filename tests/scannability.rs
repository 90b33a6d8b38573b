//! Geometric properties that keep styled codes decodable, checked over
//! real encoder output for payloads of many sizes.

use styled_qr::scene::{Geometry, Primitive};
use styled_qr::{build_scene, MatrixProvider, ModuleGrid, QrcodeProvider, RenderConfig};

const EPS: f64 = 1e-9;

fn payloads() -> Vec<String> {
    let mut out: Vec<String> = vec![
        "a".to_string(),
        "https://example.com".to_string(),
        "https://example.com/some/longer/path?with=query&and=more".to_string(),
    ];
    for len in [50, 120, 300, 700, 1200] {
        out.push("q".repeat(len));
    }
    out
}

fn grids() -> Vec<ModuleGrid> {
    payloads()
        .iter()
        .map(|p| QrcodeProvider.module_grid(p).unwrap())
        .collect()
}

fn configs() -> Vec<RenderConfig> {
    vec![
        RenderConfig::new(),
        RenderConfig::new().with_brand_name("Acme"),
        RenderConfig::new()
            .with_size(777)
            .with_logo("data:image/png;base64,AAAA"),
    ]
}

/// Module `(row, col)` whose pixel cell contains the dot center
fn dot_module(geometry: &Geometry, primitive: &Primitive) -> Option<(usize, usize)> {
    match primitive {
        Primitive::Circle { center, .. } => {
            let m = geometry.module_size();
            let col = (center.x / m).floor() as usize - 4;
            let row = (center.y / m).floor() as usize - 4;
            Some((row, col))
        }
        _ => None,
    }
}

#[test]
fn test_grid_sizes_are_covered() {
    let sizes: Vec<usize> = grids().iter().map(|g| g.size()).collect();
    assert!(sizes.iter().any(|&n| n == 21));
    assert!(sizes.iter().any(|&n| n > 100));
}

#[test]
fn test_no_dots_on_finder_patterns() {
    for grid in grids() {
        for config in configs() {
            let scene = build_scene(&grid, &config);
            let g = scene.geometry();
            for p in scene.primitives() {
                if let Some((r, c)) = dot_module(g, p) {
                    assert!(
                        !g.is_finder_pattern(r, c),
                        "dot on finder ({}, {}) n={}",
                        r,
                        c,
                        grid.size()
                    );
                }
            }
        }
    }
}

#[test]
fn test_no_dots_in_cutout_with_overlay() {
    for grid in grids() {
        for config in configs().into_iter().filter(|c| c.overlay.is_some()) {
            let scene = build_scene(&grid, &config);
            let g = scene.geometry();
            let (start, end) = g.cutout_range();
            for p in scene.primitives() {
                if let Some((r, c)) = dot_module(g, p) {
                    let inside = (start..=end).contains(&(r as i64))
                        && (start..=end).contains(&(c as i64));
                    assert!(!inside, "dot in cutout ({}, {}) n={}", r, c, grid.size());
                }
            }
        }
    }
}

#[test]
fn test_every_other_dark_module_gets_a_dot() {
    for grid in grids() {
        let scene = build_scene(&grid, &RenderConfig::new());
        let g = scene.geometry();
        let n = grid.size();
        let expected = (0..n)
            .flat_map(|r| (0..n).map(move |c| (r, c)))
            .filter(|&(r, c)| grid.is_dark(r as i64, c as i64) && !g.is_finder_pattern(r, c))
            .count();
        assert_eq!(scene.count_dots(), expected);
    }
}

#[test]
fn test_dot_centers_on_sampling_points() {
    for grid in grids() {
        let scene = build_scene(&grid, &RenderConfig::new());
        let g = scene.geometry();
        let m = g.module_size();
        for p in scene.primitives() {
            if let Primitive::Circle { center, radius, .. } = p {
                let fx = center.x / m - 0.5;
                let fy = center.y / m - 0.5;
                assert!((fx - fx.round()).abs() < 1e-6);
                assert!((fy - fy.round()).abs() < 1e-6);
                assert!(*radius < m / 2.0);
            }
        }
    }
}

#[test]
fn test_quiet_zone_is_clear() {
    for grid in grids() {
        for config in configs() {
            let scene = build_scene(&grid, &config);
            let symbol = scene.geometry().symbol_box();
            for p in scene.primitives().iter().skip(1) {
                let e = p.extent();
                assert!(e.x >= symbol.x - EPS, "{:?} enters left quiet zone", p);
                assert!(e.y >= symbol.y - EPS, "{:?} enters top quiet zone", p);
                assert!(e.right() <= symbol.right() + EPS, "{:?} enters right quiet zone", p);
                assert!(e.bottom() <= symbol.bottom() + EPS, "{:?} enters bottom quiet zone", p);
            }
        }
    }
}

#[test]
fn test_background_covers_canvas() {
    for config in configs() {
        let grid = QrcodeProvider.module_grid("https://example.com").unwrap();
        let scene = build_scene(&grid, &config);
        match &scene.primitives()[0] {
            Primitive::Rect { bounds, fill } => {
                assert_eq!(bounds.x, 0.0);
                assert_eq!(bounds.y, 0.0);
                assert_eq!(bounds.width, config.size as f64);
                assert_eq!(bounds.height, config.size as f64);
                assert_eq!(fill, &config.background);
            }
            other => panic!("expected background first, got {:?}", other),
        }
    }
}

#[test]
fn test_overlay_centered_on_canvas() {
    for grid in grids() {
        let config = RenderConfig::new()
            .with_size(600)
            .with_logo("data:image/png;base64,AAAA");
        let scene = build_scene(&grid, &config);
        let overlay = scene.overlay().expect("logo overlay");
        let c = overlay.extent().center();
        assert!((c.x - 300.0).abs() < 1e-6);
        assert!((c.y - 300.0).abs() < 1e-6);
    }
}
