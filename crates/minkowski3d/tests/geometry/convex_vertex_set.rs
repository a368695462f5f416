use minkowski3d::math::{Isometry, Point, Real, Vector};
use minkowski3d::shape::{ConvexVertexSet, IndexedSupportMap, Vertex, VertexSetError};
use std::f64::consts::PI;

// An octahedron with its 12 edges.
fn octahedron() -> (Vec<Point<Real>>, Vec<[u32; 2]>) {
    let points = vec![
        Point::new(1.0, 0.0, 0.0),
        Point::new(-1.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
        Point::new(0.0, -1.0, 0.0),
        Point::new(0.0, 0.0, 1.0),
        Point::new(0.0, 0.0, -1.0),
    ];
    let mut edges = vec![];

    for i in 0..6u32 {
        for j in (i + 1)..6 {
            // Every pair of vertices is an edge except the opposite ones.
            if j != (i ^ 1) {
                edges.push([i, j]);
            }
        }
    }

    (points, edges)
}

#[test]
fn hill_climbing_matches_linear_scan() {
    let (points, edges) = octahedron();
    let graph = ConvexVertexSet::from_points_and_edges(points.clone(), &edges).unwrap();
    let cloud = ConvexVertexSet::from_points(points).unwrap();
    let mut rng = oorandom::Rand32::new(0);

    assert!(graph.has_adjacency());
    assert!(!cloud.has_adjacency());

    for _ in 0..200 {
        let dir = Vector::new(
            rng.rand_float() as Real - 0.5,
            rng.rand_float() as Real - 0.5,
            rng.rand_float() as Real - 0.5,
        );

        let expected = cloud.local_support_point(&dir);
        for start in 0..graph.len() {
            let id = graph.local_support_point_id_from(&dir, start);
            assert_relative_eq!(graph.points()[id].coords.dot(&dir), expected.coords.dot(&dir));
        }
    }
}

#[test]
fn convex_mesh_adjacency() {
    let points = vec![
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
        Point::new(0.0, 0.0, 1.0),
    ];
    let set =
        ConvexVertexSet::from_convex_mesh(points, &[[0, 2, 1], [0, 1, 3], [0, 3, 2], [1, 2, 3]])
            .unwrap();

    for vertex in set.vertices() {
        assert_eq!(vertex.adjacency().len(), 3);
    }

    assert_eq!(
        ConvexVertexSet::from_convex_mesh(vec![Point::origin()], &[[0, 1, 2]]),
        Err(VertexSetError::AdjacencyOutOfBounds {
            vertex: 0,
            neighbor: 1,
            len: 1
        })
    );
}

#[test]
fn support_point_with_pose() {
    let cuboid = ConvexVertexSet::cuboid(Vector::new(2.0, 1.0, 0.5));
    let pose = Isometry::new(Vector::new(10.0, 0.0, 0.0), Vector::z() * (PI / 2.0));

    // After a quarter turn around `z`, the local `x` extent is along the world `y` axis.
    let pt = cuboid.support_point(&pose, &Vector::new(0.1, 1.0, 0.1));
    assert_relative_eq!(pt, Point::new(11.0, 2.0, 0.5), epsilon = 1.0e-12);
}

#[test]
fn vertex_identity_and_links() {
    let mut vertex = Vertex::new(Point::new(1.0, 2.0, 3.0)).with_id(7);

    assert!(vertex.add_neighbor(1));
    assert!(!vertex.add_neighbor(1));
    vertex.set_position(Point::origin());

    let set = ConvexVertexSet::new(vec![vertex, Vertex::new(Point::new(1.0, 0.0, 0.0))]).unwrap();
    assert_eq!(set.vertex_id(0), Some(7));
    assert_eq!(set.vertex_id(1), None);
    assert_eq!(*set.vertices()[0].position(), Point::origin());
}
