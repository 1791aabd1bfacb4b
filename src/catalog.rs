//! Catalog - the algorithm topics shown as cards on the landing page

/// One algorithm topic. Immutable, lives for the whole page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub href: &'static str,
    /// CSS `background` value for the card
    pub background: &'static str,
}

pub const ALGORITHMS: &[CatalogEntry] = &[
    CatalogEntry {
        title: "2D Convex Hull",
        description: "An algorithm to find the smallest convex polygon that encloses all points in a 2D plane.",
        href: "2dch.html",
        background: "linear-gradient(to bottom right, var(--indigo-400), var(--indigo-600))",
    },
    CatalogEntry {
        title: "3D Convex Hull",
        description: "Extends the concept of 2D convex hulls to three-dimensional space.",
        href: "3dch.html",
        background: "linear-gradient(to bottom right, var(--purple-400), var(--purple-600))",
    },
    CatalogEntry {
        title: "KD Trees",
        description: "A space-partitioning data structure for organizing points in k-dimensional space.",
        href: "kdtree.html",
        background: "linear-gradient(to bottom right, var(--pink-400), var(--pink-600))",
    },
    CatalogEntry {
        title: "Delaunay Triangulation",
        description: "A triangulation method that maximizes the minimum angle of all triangles.",
        href: "dt.html",
        background: "linear-gradient(to bottom right, var(--fuchsia-400), var(--fuchsia-600))",
    },
    CatalogEntry {
        title: "Voronoi Diagram",
        description: "A partition of a plane into regions close to each of a given set of objects.",
        href: "voronoi.html",
        background: "linear-gradient(to bottom right, var(--teal-400), var(--teal-600))",
    },
];
