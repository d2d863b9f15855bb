mod field_map;
