use super::*;
use crate::lattice::Point3;

fn simplex() -> Vec<Point3> {
    vec![
        Point3::new(1, 0, 0),
        Point3::new(0, 1, 0),
        Point3::new(0, 0, 1),
        Point3::new(-1, -1, -1),
    ]
}

fn octahedron() -> Vec<Point3> {
    vec![
        Point3::new(1, 0, 0),
        Point3::new(0, 1, 0),
        Point3::new(0, 0, 1),
        Point3::new(-1, 0, 0),
        Point3::new(0, -1, 0),
        Point3::new(0, 0, -1),
    ]
}

fn cube() -> Vec<Point3> {
    let mut v = Vec::new();
    for x in [-1, 1] {
        for y in [-1, 1] {
            for z in [-1, 1] {
                v.push(Point3::new(x, y, z));
            }
        }
    }
    v
}

#[test]
fn simplex_faces_and_edges() {
    let v = simplex();
    assert!(is_face(&v, &v[0], &v[1], &v[2]));
    assert!(is_face(&v, &v[0], &v[1], &v[3]));
    // Any three of four simplex vertices form a face; all pairs are edges.
    assert!(is_edge(&v, &v[0], &v[1]));
    assert!(is_edge(&v, &v[2], &v[3]));
}

#[test]
fn simplex_and_octahedron_are_simplicial() {
    assert!(Polytope::new(simplex()).is_simplicial());
    assert!(Polytope::new(octahedron()).is_simplicial());
}

#[test]
fn cube_is_not_simplicial() {
    // Square facets everywhere.
    assert!(!Polytope::new(cube()).is_simplicial());
}

#[test]
fn octahedron_diagonal_is_not_an_edge() {
    let v = octahedron();
    // A side of the equatorial square is an edge.
    assert!(is_edge(&v, &v[0], &v[1]));
    // The diagonal through the interior is not.
    assert!(!is_edge(&v, &v[0], &v[3]));
}

#[test]
fn child_and_vertex_set_equality() {
    let p = Polytope::new(simplex());
    let q = p.child_with(Point3::new(0, 0, -1));
    assert_eq!(q.num_vertices(), 5);
    assert!(q.has_vertex(&Point3::new(0, 0, -1)));

    let mut reordered = simplex();
    reordered.reverse();
    assert!(p.same_vertex_set(&Polytope::new(reordered)));
    assert!(!p.same_vertex_set(&q));
}
