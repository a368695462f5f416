mod convex_vertex_set;
