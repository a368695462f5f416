mod gjk_epa_cuboids;
mod gjk_epa_properties;
